//! Typed content records, one per CMS content type.
//!
//! # Design
//! These mirror the CMS schemas but are defined independently; integration
//! tests against the mock CMS catch drift. Wire names are camelCase except
//! for relation fields the CMS keeps in snake_case (`blog_posts`). Every
//! relation/media field is wrapped in [`Relation`]/[`Relations`] so the
//! nested `{data: …}` envelope flattens away during deserialization, and
//! carries `#[serde(default)]` so an unpopulated relation reads as absent
//! rather than failing the decode.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::media::Media;
use crate::relation::{PostsRef, Relation, Relations};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Relation<Media>,
    #[serde(default)]
    pub category: Relation<Category>,
    #[serde(default)]
    pub author: Relation<Author>,
    #[serde(default)]
    pub tags: Relations<Tag>,
    #[serde(default)]
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    #[serde(default, rename = "blog_posts")]
    pub blog_posts: Option<PostsRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub color: String,
    #[serde(default, rename = "blog_posts")]
    pub blog_posts: Option<PostsRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Relation<Media>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub social_links: Option<HashMap<String, String>>,
    #[serde(default, rename = "blog_posts")]
    pub blog_posts: Option<PostsRef>,
}

/// SEO component embedded inline on a blog post (components are not
/// wrapped in an entity envelope).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub og_image: Relation<Media>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub content: String,
    /// 1–5, enforced by the CMS schema.
    pub rating: u8,
    #[serde(default)]
    pub avatar: Relation<Media>,
    pub featured: bool,
    /// Manual sort position, primary ordering key.
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Competition,
    Performance,
    Workshop,
    Recital,
    Masterclass,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Competition => "competition",
            EventType::Performance => "performance",
            EventType::Workshop => "workshop",
            EventType::Recital => "recital",
            EventType::Masterclass => "masterclass",
            EventType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub featured_image: Relation<Media>,
    #[serde(default)]
    pub gallery: Relations<Media>,
    pub event_type: EventType,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub registration_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    Performance,
    Class,
    Competition,
    Event,
    BehindScenes,
    Other,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Performance => "performance",
            GalleryCategory::Class => "class",
            GalleryCategory::Competition => "competition",
            GalleryCategory::Event => "event",
            GalleryCategory::BehindScenes => "behind-scenes",
            GalleryCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Required by the CMS schema, but still envelope-wrapped on the wire;
    /// the display adapter resolves an absent image to an empty URL.
    #[serde(default)]
    pub image: Relation<Media>,
    pub category: GalleryCategory,
    pub featured: bool,
    /// Manual sort position, primary ordering key.
    pub order: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

/// Call-to-action component on the hero section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    #[serde(default)]
    pub url: Option<String>,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub open_in_new_tab: bool,
}

/// The hero singleton: exactly one record, fetched without filters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub background_image: Relation<Media>,
    #[serde(default)]
    pub background_video: Relation<Media>,
    #[serde(default)]
    pub primary_button: Option<Button>,
    #[serde(default)]
    pub secondary_button: Option<Button>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blog_post_decodes_with_populated_relations() {
        let value = json!({
            "id": 10,
            "title": "Five Stretches Before Class",
            "slug": "five-stretches",
            "excerpt": "Warm up right.",
            "content": "Long form...",
            "readTime": "4 min",
            "publishDate": "2024-03-01T09:00:00Z",
            "featured": true,
            "category": { "data": { "id": 2, "attributes": {
                "name": "Training", "slug": "training", "color": "#aa3355"
            } } },
            "author": { "data": { "id": 5, "attributes": {
                "name": "Elena Petrova", "slug": "elena-petrova"
            } } },
            "tags": { "data": [
                { "id": 1, "attributes": { "name": "Ballet", "slug": "ballet", "color": "#fff" } }
            ] }
        });
        let post: BlogPost = serde_json::from_value(value).unwrap();
        assert_eq!(post.read_time, "4 min");
        assert_eq!(post.category.as_ref().unwrap().name, "Training");
        assert_eq!(post.author.as_ref().unwrap().slug, "elena-petrova");
        assert_eq!(post.tags.len(), 1);
        assert!(post.featured_image.as_ref().is_none());
        assert!(post.seo.is_none());
    }

    #[test]
    fn category_decodes_count_back_reference() {
        let value = json!({
            "id": 2,
            "name": "Training",
            "slug": "training",
            "color": "#aa3355",
            "blog_posts": { "count": 7 }
        });
        let category: Category = serde_json::from_value(value).unwrap();
        assert_eq!(category.blog_posts.unwrap().count(), 7);
    }

    #[test]
    fn event_type_uses_lowercase_wire_names() {
        let event_type: EventType = serde_json::from_value(json!("masterclass")).unwrap();
        assert_eq!(event_type, EventType::Masterclass);
        assert_eq!(event_type.as_str(), "masterclass");
    }

    #[test]
    fn gallery_category_behind_scenes_is_kebab_case() {
        let category: GalleryCategory = serde_json::from_value(json!("behind-scenes")).unwrap();
        assert_eq!(category, GalleryCategory::BehindScenes);
        assert_eq!(category.as_str(), "behind-scenes");
    }

    #[test]
    fn hero_section_tolerates_sparse_payload() {
        let hero: HeroSection = serde_json::from_value(json!({
            "id": 1,
            "title": "Dance With Us"
        }))
        .unwrap();
        assert!(hero.subtitle.is_none());
        assert!(hero.background_image.as_ref().is_none());
        assert!(hero.primary_button.is_none());
    }

    #[test]
    fn button_decodes_variant_and_size() {
        let button: Button = serde_json::from_value(json!({
            "text": "Book a trial",
            "url": "/trial",
            "variant": "outline",
            "size": "lg",
            "openInNewTab": false
        }))
        .unwrap();
        assert_eq!(button.variant, ButtonVariant::Outline);
        assert_eq!(button.size, ButtonSize::Lg);
    }
}
