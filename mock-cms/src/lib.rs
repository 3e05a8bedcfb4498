//! In-memory mock of the headless CMS REST surface.
//!
//! Serves `GET /api/<content-type>` with the real `{data, meta}` entity
//! envelopes and interprets the query-parameter dialect the content client
//! emits: bracketed `filters[...][$eq|$ne|$gte]` predicates (paths descend
//! nested relation envelopes), multi-key `sort[n]=field:dir`,
//! `pagination[page]`/`pagination[pageSize]`, and `populate[field]=count`
//! back-references. Relations are embedded in the seed data, so `populate=*`
//! is a no-op here.
//!
//! State is a shared seeded store, as in any of our mock services; the
//! router is exposed for in-process `oneshot` tests and `run` serves it on
//! a real listener for end-to-end tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::DateTime;
use serde_json::{json, Value};
use tokio::sync::RwLock;

mod seed;

pub use seed::seed;

/// Seeded content store: collection name → entity list, plus the hero
/// singleton. Entities are stored in wire shape (`{id, attributes}`).
#[derive(Debug, Default)]
pub struct Store {
    pub collections: HashMap<String, Vec<Value>>,
    pub hero: Option<Value>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/hero-section", get(hero_section))
        .route("/api/{collection}", get(list_collection))
        .with_state(db)
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hero_section(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    let data = store.hero.clone().unwrap_or(Value::Null);
    Json(json!({ "data": data, "meta": {} }))
}

async fn list_collection(
    State(db): State<Db>,
    Path(collection): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let entities = store
        .collections
        .get(&collection)
        .ok_or(StatusCode::NOT_FOUND)?;

    let params = Params::parse(raw.as_deref().unwrap_or(""));

    let mut matched: Vec<Value> = entities
        .iter()
        .filter(|entity| params.filters.iter().all(|f| f.matches(entity)))
        .cloned()
        .collect();

    matched.sort_by(|a, b| params.ordering(a, b));

    let total = matched.len();
    let page_count = total.div_ceil(params.page_size);
    let start = (params.page - 1) * params.page_size;
    let page: Vec<Value> = matched
        .into_iter()
        .skip(start)
        .take(params.page_size)
        .map(|entity| params.apply_counts(entity))
        .collect();

    Ok(Json(json!({
        "data": page,
        "meta": { "pagination": {
            "page": params.page,
            "pageSize": params.page_size,
            "pageCount": page_count,
            "total": total,
        } }
    })))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterOp {
    Eq,
    Ne,
    Gte,
}

#[derive(Debug)]
struct Filter {
    path: Vec<String>,
    op: FilterOp,
    value: String,
}

impl Filter {
    /// A predicate holds if any candidate at the path satisfies it
    /// (to-many relations fan out).
    fn matches(&self, entity: &Value) -> bool {
        let mut candidates = Vec::new();
        lookup(entity, &self.path, &mut candidates);
        let wanted = Value::String(self.value.clone());
        match self.op {
            FilterOp::Eq => candidates
                .iter()
                .any(|c| compare(c, &wanted) == Ordering::Equal),
            FilterOp::Ne => candidates
                .iter()
                .all(|c| compare(c, &wanted) != Ordering::Equal),
            FilterOp::Gte => candidates
                .iter()
                .any(|c| compare(c, &wanted) != Ordering::Less),
        }
    }
}

#[derive(Debug, Default)]
struct Params {
    filters: Vec<Filter>,
    /// `(field, ascending)` in priority order.
    sorts: Vec<(String, bool)>,
    page: usize,
    page_size: usize,
    /// Fields requested with `populate[field]=count`.
    counts: Vec<String>,
}

impl Params {
    fn parse(raw: &str) -> Self {
        let mut params = Params { page: 1, page_size: 25, ..Params::default() };
        let mut sorts: Vec<(usize, String, bool)> = Vec::new();

        for (key, value) in pairs(raw) {
            let path = key_path(&key);
            match path.first().map(String::as_str) {
                Some("filters") if path.len() >= 3 => {
                    let op = match path[path.len() - 1].as_str() {
                        "$eq" => FilterOp::Eq,
                        "$ne" => FilterOp::Ne,
                        "$gte" => FilterOp::Gte,
                        _ => continue,
                    };
                    params.filters.push(Filter {
                        path: path[1..path.len() - 1].to_vec(),
                        op,
                        value,
                    });
                }
                Some("sort") if path.len() == 2 => {
                    let index: usize = path[1].parse().unwrap_or(usize::MAX);
                    let (field, direction) = value.split_once(':').unwrap_or((value.as_str(), "asc"));
                    sorts.push((index, field.to_string(), direction != "desc"));
                }
                Some("pagination") if path.len() == 2 => {
                    if let Ok(n) = value.parse::<usize>() {
                        match path[1].as_str() {
                            "page" => params.page = n.max(1),
                            "pageSize" => params.page_size = n.max(1),
                            _ => {}
                        }
                    }
                }
                Some("populate") if path.len() == 2 && value == "count" => {
                    params.counts.push(path[1].clone());
                }
                _ => {}
            }
        }

        sorts.sort_by_key(|(index, _, _)| *index);
        params.sorts = sorts.into_iter().map(|(_, field, asc)| (field, asc)).collect();
        params
    }

    fn ordering(&self, a: &Value, b: &Value) -> Ordering {
        for (field, ascending) in &self.sorts {
            let path = [field.clone()];
            let left = first_at(a, &path);
            let right = first_at(b, &path);
            let ordering = compare(&left, &right);
            let ordering = if *ascending { ordering } else { ordering.reverse() };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Collapse requested back-references to `{"count": n}`.
    fn apply_counts(&self, mut entity: Value) -> Value {
        if let Some(attributes) = entity.get_mut("attributes").and_then(Value::as_object_mut) {
            for field in &self.counts {
                if let Some(reference) = attributes.get_mut(field) {
                    let count = reference
                        .get("data")
                        .and_then(Value::as_array)
                        .map(Vec::len)
                        .unwrap_or(0);
                    *reference = json!({ "count": count });
                }
            }
        }
        entity
    }
}

fn pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((
                urlencoding::decode(key).ok()?.into_owned(),
                urlencoding::decode(value).ok()?.into_owned(),
            ))
        })
        .collect()
}

/// `filters[category][slug][$eq]` → `["filters", "category", "slug", "$eq"]`.
fn key_path(key: &str) -> Vec<String> {
    key.split('[')
        .map(|segment| segment.trim_end_matches(']').to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Collect every value reachable at `path`, descending through relation
/// envelopes (`{"data": …}`), entity wrappers (`{id, attributes}`) and
/// fanning out over arrays.
fn lookup<'a>(value: &'a Value, path: &[String], out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                lookup(item, path, out);
            }
        }
        Value::Object(map) => {
            if let Some(data) = map.get("data") {
                return lookup(data, path, out);
            }
            let Some(segment) = path.first() else {
                out.push(value);
                return;
            };
            let next = if let Some(attributes) = map.get("attributes") {
                if segment == "id" {
                    map.get("id")
                } else {
                    attributes.get(segment.as_str())
                }
            } else {
                map.get(segment.as_str())
            };
            if let Some(next) = next {
                lookup(next, &path[1..], out);
            }
        }
        _ => {
            if path.is_empty() {
                out.push(value);
            }
        }
    }
}

fn first_at(entity: &Value, path: &[String]) -> Value {
    let mut candidates = Vec::new();
    lookup(entity, path, &mut candidates);
    candidates.first().cloned().cloned().unwrap_or(Value::Null)
}

/// Order two scalars the way the CMS would: timestamps chronologically,
/// numbers numerically, everything else lexically on its string form.
fn compare(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (as_datetime(a), as_datetime(b)) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    stringify(a).cmp(&stringify(b))
}

fn as_datetime(value: &Value) -> Option<DateTime<chrono::FixedOffset>> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
