//! The CMS entity envelope and its normalizer.
//!
//! # Design
//! The CMS wraps every record as `{id, attributes}` and every response as
//! `{data, meta}`, where `data` is one entity, a list of entities, or null.
//! Normalization flattens an entity into a single-level record: the `id`
//! widened into the attribute map. It is total and lossless — no filtering,
//! no coercion — but shape validation happens here at the boundary: a body
//! missing `data`/`attributes` is rejected as `MalformedResponse` instead
//! of surfacing as a field-access failure somewhere downstream.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ContentError;

/// A raw CMS record: integer id plus an opaque attribute map.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub attributes: Map<String, Value>,
}

/// Pagination block of `meta`, present on paginated collection responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

/// Wire shape of `GET /<collection-type>` responses.
#[derive(Debug, Deserialize)]
pub struct CollectionResponse {
    pub data: Vec<Entity>,
    #[serde(default)]
    pub meta: Meta,
}

/// Wire shape of `GET /<single-type>` responses. `data` is null when the
/// singleton has never been published.
#[derive(Debug, Deserialize)]
pub struct SingleResponse {
    pub data: Option<Entity>,
    #[serde(default)]
    pub meta: Meta,
}

/// Flatten an entity into one record: the union of `{id}` and its
/// attribute keys. The envelope id is authoritative if the attributes also
/// carry an `id` key.
pub fn normalize_one(entity: Entity) -> Map<String, Value> {
    let mut record = entity.attributes;
    record.insert("id".to_string(), Value::from(entity.id));
    record
}

/// Flatten every entity in a collection, preserving source order (which
/// reflects the server-side sort already requested).
pub fn normalize_many(entities: Vec<Entity>) -> Vec<Map<String, Value>> {
    entities.into_iter().map(normalize_one).collect()
}

/// Decode a flattened entity into a typed content record.
pub fn record<T: DeserializeOwned>(entity: Entity) -> Result<T, ContentError> {
    serde_json::from_value(Value::Object(normalize_one(entity)))
        .map_err(|e| ContentError::MalformedResponse(e.to_string()))
}

/// Decode a collection response body into typed records.
pub fn collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ContentError> {
    let response: CollectionResponse =
        serde_json::from_str(body).map_err(|e| ContentError::MalformedResponse(e.to_string()))?;
    response.data.into_iter().map(record).collect()
}

/// Decode a collection response body, also returning its pagination block.
pub fn paginated<T: DeserializeOwned>(
    body: &str,
) -> Result<(Vec<T>, Option<Pagination>), ContentError> {
    let response: CollectionResponse =
        serde_json::from_str(body).map_err(|e| ContentError::MalformedResponse(e.to_string()))?;
    let pagination = response.meta.pagination;
    let records = response.data.into_iter().map(record).collect::<Result<_, _>>()?;
    Ok((records, pagination))
}

/// Decode a single-type response body. A null `data` yields `Ok(None)`.
pub fn single<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ContentError> {
    let response: SingleResponse =
        serde_json::from_str(body).map_err(|e| ContentError::MalformedResponse(e.to_string()))?;
    response.data.map(record).transpose()
}
