//! Display adapters: pure mappings from content records to the minimal
//! shapes a view renders.
//!
//! Media descriptors become resolved URL strings, nested entities become
//! their display scalars (category name, author name, tag names), and
//! absent optional text fields become empty strings so nothing optional
//! leaks into a rendered view. Adapters never touch the network and never
//! fail.

use chrono::{DateTime, Utc};

use crate::media::MediaResolver;
use crate::models::{
    Author, BlogPost, Button, Category, Event, EventType, GalleryCategory, GalleryItem,
    HeroSection, Tag, Testimonial,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostDisplay {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Author name, or empty when the relation was not populated.
    pub author: String,
    pub date: DateTime<Utc>,
    pub read_time: String,
    /// Category name, or empty when the relation was not populated.
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDisplay {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDisplay {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub avatar: String,
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagDisplay {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialDisplay {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDisplay {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub event_type: EventType,
    pub price: Option<f64>,
    pub registration_url: String,
    pub image: String,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItemDisplay {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: GalleryCategory,
    pub image: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroDisplay {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub background_video: String,
    pub primary_button: Option<Button>,
    pub secondary_button: Option<Button>,
    pub features: Vec<String>,
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn blog_post(resolver: &MediaResolver, post: &BlogPost) -> BlogPostDisplay {
    BlogPostDisplay {
        id: post.id,
        slug: post.slug.clone(),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        content: post.content.clone(),
        author: post
            .author
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        date: post.publish_date,
        read_time: post.read_time.clone(),
        category: post
            .category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default(),
        tags: post.tags.iter().map(|t| t.name.clone()).collect(),
        image: resolver.url(post.featured_image.as_ref()),
    }
}

pub fn category(item: &Category) -> CategoryDisplay {
    CategoryDisplay {
        id: item.id,
        name: item.name.clone(),
        slug: item.slug.clone(),
        color: item.color.clone(),
        post_count: item.blog_posts.as_ref().map(|r| r.count()).unwrap_or(0),
    }
}

pub fn author(resolver: &MediaResolver, item: &Author) -> AuthorDisplay {
    AuthorDisplay {
        id: item.id,
        name: item.name.clone(),
        slug: item.slug.clone(),
        bio: or_empty(&item.bio),
        avatar: resolver.url(item.avatar.as_ref()),
        post_count: item.blog_posts.as_ref().map(|r| r.count()).unwrap_or(0),
    }
}

pub fn tag(item: &Tag) -> TagDisplay {
    TagDisplay {
        id: item.id,
        name: item.name.clone(),
        slug: item.slug.clone(),
        color: item.color.clone(),
        post_count: item.blog_posts.as_ref().map(|r| r.count()).unwrap_or(0),
    }
}

pub fn testimonial(resolver: &MediaResolver, item: &Testimonial) -> TestimonialDisplay {
    TestimonialDisplay {
        id: item.id,
        name: item.name.clone(),
        role: item.role.clone(),
        content: item.content.clone(),
        rating: item.rating,
        avatar: resolver.url(item.avatar.as_ref()),
    }
}

pub fn event(resolver: &MediaResolver, item: &Event) -> EventDisplay {
    EventDisplay {
        id: item.id,
        slug: item.slug.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        short_description: or_empty(&item.short_description),
        start_date: item.start_date,
        end_date: item.end_date,
        location: or_empty(&item.location),
        event_type: item.event_type,
        price: item.price,
        registration_url: or_empty(&item.registration_url),
        image: resolver.url(item.featured_image.as_ref()),
        gallery: item
            .gallery
            .iter()
            .map(|media| resolver.url(Some(media)))
            .collect(),
    }
}

pub fn gallery_item(resolver: &MediaResolver, item: &GalleryItem) -> GalleryItemDisplay {
    GalleryItemDisplay {
        id: item.id,
        title: item.title.clone(),
        description: or_empty(&item.description),
        category: item.category,
        image: resolver.url(item.image.as_ref()),
        tags: item.tags.clone().unwrap_or_default(),
    }
}

pub fn hero(resolver: &MediaResolver, section: &HeroSection) -> HeroDisplay {
    HeroDisplay {
        id: section.id,
        title: section.title.clone(),
        subtitle: or_empty(&section.subtitle),
        background_image: resolver.url(section.background_image.as_ref()),
        background_video: resolver.url(section.background_video.as_ref()),
        primary_button: section.primary_button.clone(),
        secondary_button: section.secondary_button.clone(),
        features: section.features.clone().unwrap_or_default(),
    }
}
