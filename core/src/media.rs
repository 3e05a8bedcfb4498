//! Media descriptors and URL resolution.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Descriptor for an asset stored by the CMS. Always fetched by reference
/// from a content record; never owned or mutated by this client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    pub hash: String,
    pub ext: String,
    pub mime: String,
    /// Size in kilobytes, as reported by the CMS.
    pub size: f64,
    /// Relative path under the CMS host, or an absolute URL when the asset
    /// lives on an external storage provider.
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    pub provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resolves media descriptors to directly usable URLs.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base: String,
}

impl MediaResolver {
    pub fn new(cms_url: impl Into<String>) -> Self {
        Self {
            base: cms_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a media descriptor. No media attached resolves to
    /// an empty string, never a broken reference; a stored URL that already
    /// has a scheme passes through unchanged; a relative path is joined to
    /// the configured CMS host.
    pub fn url(&self, media: Option<&Media>) -> String {
        match media {
            None => String::new(),
            Some(media) if media.url.starts_with("http") => media.url.clone(),
            Some(media) => format!("{}{}", self.base, media.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample(url: &str) -> Media {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "pose.png",
            "hash": "pose_abc123",
            "ext": ".png",
            "mime": "image/png",
            "size": 48.2,
            "url": url,
            "provider": "local",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn absent_media_resolves_to_empty_string() {
        let resolver = MediaResolver::new("http://localhost:1337");
        assert_eq!(resolver.url(None), "");
    }

    #[test]
    fn absolute_url_passes_through() {
        let resolver = MediaResolver::new("http://localhost:1337");
        let media = sample("http://cdn.example.com/y.png");
        assert_eq!(resolver.url(Some(&media)), "http://cdn.example.com/y.png");
    }

    #[test]
    fn relative_path_joins_configured_host() {
        let resolver = MediaResolver::new("http://localhost:1337/");
        let media = sample("/uploads/y.png");
        assert_eq!(resolver.url(Some(&media)), "http://localhost:1337/uploads/y.png");
    }

    #[test]
    fn camel_case_wire_names_decode() {
        let media = sample("/uploads/y.png");
        assert_eq!(media.ext, ".png");
        assert!(media.alternative_text.is_none());
    }
}
