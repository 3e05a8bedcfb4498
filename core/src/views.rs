//! Render-agnostic view models.
//!
//! # Design
//! The host drives these the same way it drives the client: it calls
//! `begin()`, issues the built requests (concurrently if it likes), and
//! feeds each parsed result in through a `resolve_*` method. Completions
//! are handled independently per source — a view with four sources holds
//! four [`Resource`]s and one failure never disturbs the other three.
//! Views are the crate's sole recovery boundary: on failure they keep a
//! short message for the user and substitute their static fallback content
//! so the page never renders blank.

use crate::display::{
    self, AuthorDisplay, BlogPostDisplay, CategoryDisplay, GalleryItemDisplay, TagDisplay,
    TestimonialDisplay,
};
use crate::error::ContentError;
use crate::fallback;
use crate::media::MediaResolver;
use crate::models::{Author, BlogPost, Category, GalleryItem, Tag, Testimonial};
use crate::resource::Resource;

/// Gallery grid plus the full-screen image modal over whatever list is
/// currently shown (fetched or fallback).
#[derive(Debug)]
pub struct GalleryView {
    items: Resource<Vec<GalleryItemDisplay>>,
    fallback: Vec<GalleryItemDisplay>,
    modal: Option<usize>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self {
            items: Resource::Idle,
            fallback: fallback::gallery_items(),
            modal: None,
        }
    }

    pub fn begin(&mut self) {
        self.items.start();
        self.modal = None;
    }

    pub fn resolve(
        &mut self,
        resolver: &MediaResolver,
        result: Result<Vec<GalleryItem>, ContentError>,
    ) {
        let display = result
            .map(|items| items.iter().map(|i| display::gallery_item(resolver, i)).collect());
        self.items.resolve(display, "Failed to load gallery");
    }

    pub fn is_loading(&self) -> bool {
        self.items.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.items.error()
    }

    /// The list the grid and modal navigate: the fetched items on success,
    /// the static sample set on failure, nothing while idle or loading.
    pub fn items(&self) -> &[GalleryItemDisplay] {
        match &self.items {
            Resource::Ready(items) => items,
            Resource::Failed(_) => &self.fallback,
            Resource::Idle | Resource::Loading => &[],
        }
    }

    pub fn modal_index(&self) -> Option<usize> {
        self.modal
    }

    pub fn open_modal(&mut self, index: usize) {
        if index < self.items().len() {
            self.modal = Some(index);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Advance the modal, wrapping from the last image back to the first.
    pub fn next_image(&mut self) {
        let len = self.items().len();
        if let Some(index) = self.modal {
            if len > 0 {
                self.modal = Some((index + 1) % len);
            }
        }
    }

    /// Step the modal back, wrapping from the first image to the last.
    pub fn previous_image(&mut self) {
        let len = self.items().len();
        if let Some(index) = self.modal {
            if len > 0 {
                self.modal = Some((index + len - 1) % len);
            }
        }
    }

    pub fn current_image(&self) -> Option<&GalleryItemDisplay> {
        self.modal.and_then(|index| self.items().get(index))
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

/// Testimonial carousel with static fallback.
#[derive(Debug)]
pub struct TestimonialsView {
    testimonials: Resource<Vec<TestimonialDisplay>>,
    fallback: Vec<TestimonialDisplay>,
}

impl TestimonialsView {
    pub fn new() -> Self {
        Self {
            testimonials: Resource::Idle,
            fallback: fallback::testimonials(),
        }
    }

    pub fn begin(&mut self) {
        self.testimonials.start();
    }

    pub fn resolve(
        &mut self,
        resolver: &MediaResolver,
        result: Result<Vec<Testimonial>, ContentError>,
    ) {
        let display = result
            .map(|items| items.iter().map(|t| display::testimonial(resolver, t)).collect());
        self.testimonials.resolve(display, "Failed to load testimonials");
    }

    pub fn is_loading(&self) -> bool {
        self.testimonials.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.testimonials.error()
    }

    pub fn items(&self) -> &[TestimonialDisplay] {
        match &self.testimonials {
            Resource::Ready(items) => items,
            Resource::Failed(_) => &self.fallback,
            Resource::Idle | Resource::Loading => &[],
        }
    }
}

impl Default for TestimonialsView {
    fn default() -> Self {
        Self::new()
    }
}

/// The blog index page: four independent data sources fetched
/// concurrently by the host and resolved in any order.
#[derive(Debug, Default)]
pub struct BlogPageView {
    posts: Resource<Vec<BlogPostDisplay>>,
    categories: Resource<Vec<CategoryDisplay>>,
    authors: Resource<Vec<AuthorDisplay>>,
    tags: Resource<Vec<TagDisplay>>,
}

impl BlogPageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.posts.start();
        self.categories.start();
        self.authors.start();
        self.tags.start();
    }

    pub fn resolve_posts(
        &mut self,
        resolver: &MediaResolver,
        result: Result<Vec<BlogPost>, ContentError>,
    ) {
        let display =
            result.map(|posts| posts.iter().map(|p| display::blog_post(resolver, p)).collect());
        self.posts.resolve(display, "Failed to load blog posts");
    }

    pub fn resolve_categories(&mut self, result: Result<Vec<Category>, ContentError>) {
        let display = result.map(|items| items.iter().map(display::category).collect());
        self.categories.resolve(display, "Failed to load categories");
    }

    pub fn resolve_authors(
        &mut self,
        resolver: &MediaResolver,
        result: Result<Vec<Author>, ContentError>,
    ) {
        let display =
            result.map(|items| items.iter().map(|a| display::author(resolver, a)).collect());
        self.authors.resolve(display, "Failed to load authors");
    }

    pub fn resolve_tags(&mut self, result: Result<Vec<Tag>, ContentError>) {
        let display = result.map(|items| items.iter().map(display::tag).collect());
        self.tags.resolve(display, "Failed to load tags");
    }

    pub fn is_loading(&self) -> bool {
        self.posts.is_loading()
            || self.categories.is_loading()
            || self.authors.is_loading()
            || self.tags.is_loading()
    }

    pub fn posts(&self) -> &[BlogPostDisplay] {
        self.posts.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn categories(&self) -> &[CategoryDisplay] {
        self.categories.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn authors(&self) -> &[AuthorDisplay] {
        self.authors.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn tags(&self) -> &[TagDisplay] {
        self.tags.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn posts_error(&self) -> Option<&str> {
        self.posts.error()
    }

    pub fn categories_error(&self) -> Option<&str> {
        self.categories.error()
    }

    pub fn authors_error(&self) -> Option<&str> {
        self.authors.error()
    }

    pub fn tags_error(&self) -> Option<&str> {
        self.tags.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> MediaResolver {
        MediaResolver::new("http://localhost:1337")
    }

    fn gallery_record(id: u64, title: &str) -> GalleryItem {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "image": { "data": null },
            "category": "performance",
            "featured": true,
            "order": id,
            "createdAt": "2024-02-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn fetch_failed() -> ContentError {
        ContentError::Transport { status: 500, body: "boom".to_string() }
    }

    #[test]
    fn gallery_shows_nothing_while_loading() {
        let mut view = GalleryView::new();
        view.begin();
        assert!(view.is_loading());
        assert!(view.items().is_empty());
    }

    #[test]
    fn gallery_failure_substitutes_exactly_the_fallback_list() {
        let mut view = GalleryView::new();
        view.begin();
        view.resolve(&resolver(), Err(fetch_failed()));
        assert_eq!(view.error(), Some("Failed to load gallery"));
        assert_eq!(view.items(), fallback::gallery_items());
    }

    #[test]
    fn modal_wraps_both_directions_over_the_fallback_list() {
        let mut view = GalleryView::new();
        view.begin();
        view.resolve(&resolver(), Err(fetch_failed()));
        let len = view.items().len();
        assert!(len > 1);

        view.open_modal(0);
        view.previous_image();
        assert_eq!(view.modal_index(), Some(len - 1));
        view.next_image();
        assert_eq!(view.modal_index(), Some(0));
        assert!(view.current_image().is_some());

        view.close_modal();
        assert!(view.modal_index().is_none());
    }

    #[test]
    fn modal_navigates_fetched_items() {
        let mut view = GalleryView::new();
        view.begin();
        view.resolve(
            &resolver(),
            Ok(vec![
                gallery_record(1, "Opening"),
                gallery_record(2, "Duet"),
                gallery_record(3, "Finale"),
            ]),
        );
        view.open_modal(2);
        view.next_image();
        assert_eq!(view.modal_index(), Some(0));
        assert_eq!(view.current_image().unwrap().title, "Opening");
    }

    #[test]
    fn open_modal_out_of_range_is_ignored() {
        let mut view = GalleryView::new();
        view.begin();
        view.resolve(&resolver(), Ok(vec![gallery_record(1, "Only")]));
        view.open_modal(5);
        assert!(view.modal_index().is_none());
    }

    #[test]
    fn successful_empty_gallery_stays_empty() {
        let mut view = GalleryView::new();
        view.begin();
        view.resolve(&resolver(), Ok(Vec::new()));
        assert!(view.items().is_empty());
        assert!(view.error().is_none());
    }

    #[test]
    fn testimonials_failure_falls_back_to_sample_set() {
        let mut view = TestimonialsView::new();
        view.begin();
        view.resolve(&resolver(), Err(fetch_failed()));
        assert_eq!(view.items(), fallback::testimonials());
    }

    #[test]
    fn one_failed_source_leaves_the_other_three_rendered() {
        let mut view = BlogPageView::new();
        view.begin();
        assert!(view.is_loading());

        let post: BlogPost = serde_json::from_value(json!({
            "id": 1,
            "title": "First",
            "slug": "first",
            "excerpt": "",
            "content": "",
            "readTime": "2 min",
            "publishDate": "2024-03-01T09:00:00Z"
        }))
        .unwrap();
        let category: Category = serde_json::from_value(json!({
            "id": 1, "name": "Training", "slug": "training", "color": "#aa3355"
        }))
        .unwrap();
        let tag: Tag = serde_json::from_value(json!({
            "id": 1, "name": "Ballet", "slug": "ballet", "color": "#fff"
        }))
        .unwrap();

        // Completions arrive in arbitrary order; authors fails.
        view.resolve_tags(Ok(vec![tag]));
        view.resolve_posts(&resolver(), Ok(vec![post]));
        view.resolve_authors(&resolver(), Err(fetch_failed()));
        view.resolve_categories(Ok(vec![category]));

        assert!(!view.is_loading());
        assert_eq!(view.posts().len(), 1);
        assert_eq!(view.categories().len(), 1);
        assert_eq!(view.tags().len(), 1);
        assert!(view.authors().is_empty());
        assert_eq!(view.authors_error(), Some("Failed to load authors"));
        assert!(view.posts_error().is_none());
        assert!(view.categories_error().is_none());
        assert!(view.tags_error().is_none());
    }
}
