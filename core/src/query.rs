//! Query-string builder for the CMS REST API.
//!
//! # Design
//! The CMS uses bracketed path notation: `populate[author][populate][avatar]=*`,
//! `filters[category][slug][$eq]=ballet`, `sort[0]=order:asc`,
//! `pagination[pageSize]=6`. `Query` collects key/value pairs in insertion
//! order and percent-encodes both sides at the end, so builders stay pure
//! and unit tests can assert on exact encodings.

use std::fmt;

/// Comparison operator for a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `$eq` — field equals value.
    Eq,
    /// `$ne` — field does not equal value.
    Ne,
    /// `$gte` — field is greater than or equal to value.
    Gte,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Eq => write!(f, "$eq"),
            Op::Ne => write!(f, "$ne"),
            Op::Gte => write!(f, "$gte"),
        }
    }
}

/// An ordered collection of CMS query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
    sort_index: usize,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline a relation or media field: `populate[field]=*`.
    pub fn populate(mut self, field: &str) -> Self {
        self.pairs.push((format!("populate[{field}]"), "*".to_string()));
        self
    }

    /// Inline a relation and one of its own relations:
    /// `populate[field][populate][inner]=*`.
    pub fn populate_nested(mut self, field: &str, inner: &str) -> Self {
        self.pairs
            .push((format!("populate[{field}][populate][{inner}]"), "*".to_string()));
        self
    }

    /// Request only the record count for a to-many back-reference:
    /// `populate[field]=count`.
    pub fn populate_count(mut self, field: &str) -> Self {
        self.pairs.push((format!("populate[{field}]"), "count".to_string()));
        self
    }

    /// Add a filter predicate on a (possibly nested) field path:
    /// `filters[a][b][$op]=value`.
    pub fn filter(mut self, path: &[&str], op: Op, value: impl fmt::Display) -> Self {
        let mut key = String::from("filters");
        for segment in path {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
        key.push('[');
        key.push_str(&op.to_string());
        key.push(']');
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a sort key: `sort[n]=field:direction`. Indices are assigned
    /// in call order, so the first call is the primary sort.
    pub fn sort(mut self, spec: &str) -> Self {
        self.pairs
            .push((format!("sort[{}]", self.sort_index), spec.to_string()));
        self.sort_index += 1;
        self
    }

    /// `pagination[page]=n` (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.pairs
            .push(("pagination[page]".to_string(), page.to_string()));
        self
    }

    /// `pagination[pageSize]=n`.
    pub fn page_size(mut self, size: u32) -> Self {
        self.pairs
            .push(("pagination[pageSize]".to_string(), size.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode all pairs into a query string (no leading `?`).
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
