//! Nested relation envelopes.
//!
//! Relations and media arrive wrapped one level deeper than the record that
//! owns them: `{"data": {id, attributes}}` for to-one, `{"data": [...]}`
//! for to-many, `{"data": null}` when nothing is linked. These wrappers
//! flatten that envelope during deserialization so content models read as
//! plain structs.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::envelope::{normalize_one, Entity};

fn flatten<T, E>(entity: Entity) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeError,
{
    serde_json::from_value(Value::Object(normalize_one(entity))).map_err(E::custom)
}

/// A to-one relation or media field. `Relation(None)` covers both a null
/// `data` and an absent field (via `#[serde(default)]` on the owner).
#[derive(Debug, Clone, PartialEq)]
pub struct Relation<T>(pub Option<T>);

impl<T> Relation<T> {
    pub fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Relation(None)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Relation<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            data: Option<Entity>,
        }
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Relation(None));
        }
        let envelope: Envelope = serde_json::from_value(value).map_err(D::Error::custom)?;
        match envelope.data {
            None => Ok(Relation(None)),
            Some(entity) => Ok(Relation(Some(flatten(entity)?))),
        }
    }
}

/// A to-many relation or media collection, flattened in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Relations<T>(pub Vec<T>);

impl<T> Relations<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Relations<T> {
    fn default() -> Self {
        Relations(Vec::new())
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Relations<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            data: Vec<Entity>,
        }
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Relations(Vec::new()));
        }
        let envelope: Envelope = serde_json::from_value(value).map_err(D::Error::custom)?;
        let items = envelope
            .data
            .into_iter()
            .map(flatten::<T, D::Error>)
            .collect::<Result<Vec<T>, D::Error>>()?;
        Ok(Relations(items))
    }
}

/// Minimal projection of a blog post inside a populated back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostPreview {
    pub id: u64,
    pub title: String,
    pub slug: String,
}

/// The blog-post back-reference on categories, authors and tags.
///
/// Depending on how the caller populated it, the CMS returns either just a
/// count (`populate[blog_posts]=count` → `{"count": n}`) or the full list.
/// The two modes are distinct variants rather than one overloaded field.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsRef {
    Count(u64),
    Posts(Vec<PostPreview>),
}

impl PostsRef {
    /// Number of referenced posts regardless of mode.
    pub fn count(&self) -> u64 {
        match self {
            PostsRef::Count(n) => *n,
            PostsRef::Posts(posts) => posts.len() as u64,
        }
    }
}

impl<'de> Deserialize<'de> for PostsRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let object = value
            .as_object()
            .ok_or_else(|| D::Error::custom("blog_posts reference must be an object"))?;
        if let Some(count) = object.get("count") {
            let count = count
                .as_u64()
                .ok_or_else(|| D::Error::custom("blog_posts count must be a non-negative integer"))?;
            return Ok(PostsRef::Count(count));
        }
        if object.contains_key("data") {
            let Relations(posts) = serde_json::from_value(value).map_err(D::Error::custom)?;
            return Ok(PostsRef::Posts(posts));
        }
        Err(D::Error::custom(
            "blog_posts reference carries neither count nor data",
        ))
    }
}
