//! Content query services: one build/parse pair per CMS operation.
//!
//! # Design
//! `ContentClient` holds only the API base URL and the optional bearer
//! token, and carries no mutable state between calls. Each operation is
//! split into a `build_*` method that produces an [`HttpRequest`] and a
//! `parse_*` method that consumes an [`HttpResponse`]; whoever owns the
//! client executes the round-trip in between (see [`crate::transport`]).
//! Convenience lookups ("posts by category", "upcoming events") are
//! pre-filled parameter sets over the base builders — query construction
//! lives in exactly one place per content type.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::ContentError;
use crate::http::{HttpRequest, HttpResponse};
use crate::models::{
    Author, BlogPost, Category, Event, GalleryItem, HeroSection, Tag, Testimonial,
};
use crate::query::{Op, Query};

/// Parameters for blog-post collection queries.
#[derive(Debug, Clone, Default)]
pub struct BlogPostQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Category slug to scope to.
    pub category: Option<String>,
    /// Author slug to scope to.
    pub author: Option<String>,
    /// Tag slug to scope to.
    pub tag: Option<String>,
    pub featured: Option<bool>,
}

impl BlogPostQuery {
    pub fn by_category(slug: impl Into<String>) -> Self {
        Self { category: Some(slug.into()), ..Self::default() }
    }

    pub fn by_author(slug: impl Into<String>) -> Self {
        Self { author: Some(slug.into()), ..Self::default() }
    }

    pub fn by_tag(slug: impl Into<String>) -> Self {
        Self { tag: Some(slug.into()), ..Self::default() }
    }
}

/// Parameters for event collection queries.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub featured: bool,
    /// Only events starting at or after this instant. Passed explicitly
    /// (callers use `Utc::now()`) so request building stays deterministic.
    pub starting_after: Option<DateTime<Utc>>,
    /// Event-type discriminator, e.g. `workshop`.
    pub event_type: Option<String>,
    pub limit: Option<u32>,
}

impl EventQuery {
    pub fn upcoming(after: DateTime<Utc>, limit: u32) -> Self {
        Self { starting_after: Some(after), limit: Some(limit), ..Self::default() }
    }

    pub fn featured(limit: u32) -> Self {
        Self { featured: true, limit: Some(limit), ..Self::default() }
    }
}

/// Parameters for gallery-item collection queries.
#[derive(Debug, Clone, Default)]
pub struct GalleryQuery {
    pub featured: bool,
    /// Gallery category discriminator, e.g. `performance`.
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl GalleryQuery {
    pub fn featured(limit: u32) -> Self {
        Self { featured: true, limit: Some(limit), ..Self::default() }
    }
}

/// Stateless, read-only client for the CMS REST API.
///
/// Builds GET requests and parses `{data, meta}` envelope responses
/// without touching the network.
#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    api_token: Option<String>,
}

impl ContentClient {
    /// `base_url` is the CMS root; the REST API lives under `<root>/api`.
    pub fn new(base_url: &str, api_token: Option<String>) -> Self {
        Self {
            base_url: format!("{}/api", base_url.trim_end_matches('/')),
            api_token: api_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.cms_url, config.api_token.clone())
    }

    fn request(&self, path: &str, query: &Query) -> HttpRequest {
        let url = if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{}", self.base_url, query.encode())
        };
        let mut headers = vec![(
            "content-type".to_string(),
            "application/json".to_string(),
        )];
        if let Some(token) = &self.api_token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest { url, headers }
    }

    // --- blog posts ---

    fn blog_post_populate(query: Query) -> Query {
        query
            .populate("featuredImage")
            .populate("category")
            .populate_nested("author", "avatar")
            .populate("tags")
            .populate_nested("seo", "ogImage")
    }

    pub fn build_blog_posts(&self, params: &BlogPostQuery) -> HttpRequest {
        let mut query = Self::blog_post_populate(Query::new());
        if let Some(page) = params.page {
            query = query.page(page);
        }
        if let Some(page_size) = params.page_size {
            query = query.page_size(page_size);
        }
        if let Some(category) = &params.category {
            query = query.filter(&["category", "slug"], Op::Eq, category);
        }
        if let Some(author) = &params.author {
            query = query.filter(&["author", "slug"], Op::Eq, author);
        }
        if let Some(tag) = &params.tag {
            query = query.filter(&["tags", "slug"], Op::Eq, tag);
        }
        if let Some(featured) = params.featured {
            query = query.filter(&["featured"], Op::Eq, featured);
        }
        let query = query.sort("publishDate:desc");
        self.request("/blog-posts", &query)
    }

    pub fn parse_blog_posts(&self, response: HttpResponse) -> Result<Vec<BlogPost>, ContentError> {
        parse_collection(response)
    }

    /// Like [`parse_blog_posts`](Self::parse_blog_posts), also returning the
    /// pagination block so the blog page can render page controls.
    pub fn parse_blog_posts_page(
        &self,
        response: HttpResponse,
    ) -> Result<(Vec<BlogPost>, Option<envelope::Pagination>), ContentError> {
        check_status(&response)?;
        envelope::paginated(&response.body)
    }

    pub fn build_post_by_slug(&self, slug: &str) -> HttpRequest {
        let query = Self::blog_post_populate(Query::new().filter(&["slug"], Op::Eq, slug));
        self.request("/blog-posts", &query)
    }

    /// Zero matches is a valid outcome (`Ok(None)`), distinct from a
    /// failed fetch.
    pub fn parse_post_by_slug(
        &self,
        response: HttpResponse,
    ) -> Result<Option<BlogPost>, ContentError> {
        Ok(parse_collection(response)?.into_iter().next())
    }

    /// Posts sharing a category with `post_id`, excluding the post itself.
    pub fn build_related_posts(
        &self,
        post_id: u64,
        category_slug: &str,
        limit: u32,
    ) -> HttpRequest {
        let query = Query::new()
            .filter(&["category", "slug"], Op::Eq, category_slug)
            .filter(&["id"], Op::Ne, post_id)
            .page_size(limit)
            .populate("featuredImage")
            .populate("category")
            .populate("author")
            .sort("publishDate:desc");
        self.request("/blog-posts", &query)
    }

    pub fn parse_related_posts(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<BlogPost>, ContentError> {
        parse_collection(response)
    }

    // --- blog taxonomy ---

    pub fn build_categories(&self) -> HttpRequest {
        let query = Query::new().populate_count("blog_posts").sort("name:asc");
        self.request("/categories", &query)
    }

    pub fn parse_categories(&self, response: HttpResponse) -> Result<Vec<Category>, ContentError> {
        parse_collection(response)
    }

    pub fn build_authors(&self) -> HttpRequest {
        let query = Query::new()
            .populate("avatar")
            .populate_count("blog_posts")
            .sort("name:asc");
        self.request("/authors", &query)
    }

    pub fn parse_authors(&self, response: HttpResponse) -> Result<Vec<Author>, ContentError> {
        parse_collection(response)
    }

    pub fn build_tags(&self) -> HttpRequest {
        let query = Query::new().populate_count("blog_posts").sort("name:asc");
        self.request("/tags", &query)
    }

    pub fn parse_tags(&self, response: HttpResponse) -> Result<Vec<Tag>, ContentError> {
        parse_collection(response)
    }

    // --- homepage ---

    pub fn build_hero_section(&self) -> HttpRequest {
        let query = Query::new()
            .populate("backgroundImage")
            .populate("backgroundVideo")
            .populate("primaryButton")
            .populate("secondaryButton");
        self.request("/hero-section", &query)
    }

    /// The hero is a singleton; an unpublished one comes back as null
    /// `data` and yields `Ok(None)`.
    pub fn parse_hero_section(
        &self,
        response: HttpResponse,
    ) -> Result<Option<HeroSection>, ContentError> {
        check_status(&response)?;
        envelope::single(&response.body)
    }

    pub fn build_testimonials(&self, featured_only: bool) -> HttpRequest {
        let mut query = Query::new().populate("avatar");
        if featured_only {
            query = query.filter(&["featured"], Op::Eq, true);
        }
        let query = query.sort("order:asc").sort("createdAt:desc");
        self.request("/testimonials", &query)
    }

    pub fn parse_testimonials(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Testimonial>, ContentError> {
        parse_collection(response)
    }

    pub fn build_events(&self, params: &EventQuery) -> HttpRequest {
        let mut query = Query::new().populate("featuredImage").populate("gallery");
        if params.featured {
            query = query.filter(&["featured"], Op::Eq, true);
        }
        if let Some(after) = params.starting_after {
            query = query.filter(&["startDate"], Op::Gte, after.to_rfc3339());
        }
        if let Some(event_type) = &params.event_type {
            query = query.filter(&["eventType"], Op::Eq, event_type);
        }
        if let Some(limit) = params.limit {
            query = query.page_size(limit);
        }
        let query = query.sort("startDate:asc");
        self.request("/events", &query)
    }

    pub fn parse_events(&self, response: HttpResponse) -> Result<Vec<Event>, ContentError> {
        parse_collection(response)
    }

    pub fn build_event_by_slug(&self, slug: &str) -> HttpRequest {
        let query = Query::new()
            .filter(&["slug"], Op::Eq, slug)
            .populate("featuredImage")
            .populate("gallery");
        self.request("/events", &query)
    }

    pub fn parse_event_by_slug(
        &self,
        response: HttpResponse,
    ) -> Result<Option<Event>, ContentError> {
        Ok(parse_collection(response)?.into_iter().next())
    }

    pub fn build_gallery_items(&self, params: &GalleryQuery) -> HttpRequest {
        let mut query = Query::new().populate("image");
        if params.featured {
            query = query.filter(&["featured"], Op::Eq, true);
        }
        if let Some(category) = &params.category {
            query = query.filter(&["category"], Op::Eq, category);
        }
        if let Some(limit) = params.limit {
            query = query.page_size(limit);
        }
        let query = query.sort("order:asc").sort("createdAt:desc");
        self.request("/gallery-items", &query)
    }

    pub fn parse_gallery_items(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<GalleryItem>, ContentError> {
        parse_collection(response)
    }
}

/// Non-2xx responses become `Transport` errors; the body rides along for
/// the view's log line.
fn check_status(response: &HttpResponse) -> Result<(), ContentError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ContentError::Transport {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_collection<T: DeserializeOwned>(response: HttpResponse) -> Result<Vec<T>, ContentError> {
    check_status(&response)?;
    envelope::collection(&response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ContentClient {
        ContentClient::new("http://localhost:1337", None)
    }

    fn ok(body: serde_json::Value) -> HttpResponse {
        HttpResponse { status: 200, headers: Vec::new(), body: body.to_string() }
    }

    #[test]
    fn base_url_gains_api_prefix_and_loses_trailing_slash() {
        let c = ContentClient::new("http://localhost:1337/", None);
        let req = c.build_tags();
        assert!(req.url.starts_with("http://localhost:1337/api/tags?"));
    }

    #[test]
    fn bearer_header_only_when_token_configured() {
        let anonymous = client().build_categories();
        assert_eq!(
            anonymous.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );

        let authed = ContentClient::new("http://localhost:1337", Some("tok".to_string()))
            .build_categories();
        assert!(authed
            .headers
            .contains(&("authorization".to_string(), "Bearer tok".to_string())));
    }

    #[test]
    fn empty_token_means_no_bearer_header() {
        let c = ContentClient::new("http://localhost:1337", Some(String::new()));
        let req = c.build_categories();
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn blog_posts_request_populates_relations_and_sorts_by_publish_date() {
        let req = client().build_blog_posts(&BlogPostQuery::default());
        assert!(req.url.contains(&urlencoding::encode("populate[featuredImage]").into_owned()));
        assert!(req.url.contains(&urlencoding::encode("populate[author][populate][avatar]").into_owned()));
        assert!(req.url.contains(&format!(
            "{}={}",
            urlencoding::encode("sort[0]"),
            urlencoding::encode("publishDate:desc")
        )));
    }

    #[test]
    fn category_scope_filters_on_category_slug() {
        let req = client().build_blog_posts(&BlogPostQuery::by_category("ballet"));
        assert!(req.url.contains(&format!(
            "{}=ballet",
            urlencoding::encode("filters[category][slug][$eq]")
        )));
    }

    #[test]
    fn author_and_tag_scopes_filter_on_their_slugs() {
        let req = client().build_blog_posts(&BlogPostQuery::by_author("elena-petrova"));
        assert!(req.url.contains(&format!(
            "{}=elena-petrova",
            urlencoding::encode("filters[author][slug][$eq]")
        )));

        let req = client().build_blog_posts(&BlogPostQuery::by_tag("ballet"));
        assert!(req.url.contains(&format!(
            "{}=ballet",
            urlencoding::encode("filters[tags][slug][$eq]")
        )));
    }

    #[test]
    fn related_posts_excludes_current_id() {
        let req = client().build_related_posts(42, "ballet", 3);
        assert!(req.url.contains(&format!(
            "{}=42",
            urlencoding::encode("filters[id][$ne]")
        )));
        assert!(req.url.contains(&format!(
            "{}=3",
            urlencoding::encode("pagination[pageSize]")
        )));
    }

    #[test]
    fn taxonomy_requests_use_count_populate() {
        let req = client().build_categories();
        assert!(req.url.contains(&format!(
            "{}=count",
            urlencoding::encode("populate[blog_posts]")
        )));
    }

    #[test]
    fn testimonials_sort_by_order_then_created_at() {
        let req = client().build_testimonials(true);
        assert!(req.url.contains(&format!(
            "{}=true",
            urlencoding::encode("filters[featured][$eq]")
        )));
        let order = req.url.find(&format!(
            "{}={}",
            urlencoding::encode("sort[0]"),
            urlencoding::encode("order:asc")
        ));
        let created = req.url.find(&format!(
            "{}={}",
            urlencoding::encode("sort[1]"),
            urlencoding::encode("createdAt:desc")
        ));
        assert!(order.is_some() && created.is_some());
    }

    #[test]
    fn upcoming_events_filter_on_start_date() {
        let after = "2024-06-01T00:00:00Z".parse().unwrap();
        let req = client().build_events(&EventQuery::upcoming(after, 3));
        assert!(req.url.contains(&urlencoding::encode("filters[startDate][$gte]").into_owned()));
        assert!(req.url.contains(&format!(
            "{}={}",
            urlencoding::encode("sort[0]"),
            urlencoding::encode("startDate:asc")
        )));
    }

    #[test]
    fn featured_events_filter_and_cap_page_size() {
        let req = client().build_events(&EventQuery::featured(4));
        assert!(req.url.contains(&format!(
            "{}=true",
            urlencoding::encode("filters[featured][$eq]")
        )));
        assert!(req.url.contains(&format!(
            "{}=4",
            urlencoding::encode("pagination[pageSize]")
        )));
    }

    #[test]
    fn event_by_slug_filters_on_slug_and_populates_media() {
        let req = client().build_event_by_slug("winter-recital");
        assert!(req.url.contains(&format!(
            "{}=winter-recital",
            urlencoding::encode("filters[slug][$eq]")
        )));
        assert!(req.url.contains(&urlencoding::encode("populate[gallery]").into_owned()));
    }

    #[test]
    fn slug_lookup_with_zero_matches_is_none_not_error() {
        let response = ok(json!({ "data": [], "meta": {} }));
        let post = client().parse_post_by_slug(response).unwrap();
        assert!(post.is_none());
    }

    #[test]
    fn event_slug_lookup_with_zero_matches_is_none_not_error() {
        let response = ok(json!({ "data": [], "meta": {} }));
        let event = client().parse_event_by_slug(response).unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn paginated_parse_surfaces_page_controls() {
        let response = ok(json!({
            "data": [{
                "id": 4,
                "attributes": {
                    "title": "Fourth",
                    "slug": "fourth",
                    "excerpt": "",
                    "content": "",
                    "readTime": "2 min",
                    "publishDate": "2024-03-01T09:00:00Z"
                }
            }],
            "meta": { "pagination": { "page": 2, "pageSize": 1, "pageCount": 4, "total": 4 } }
        }));
        let (posts, pagination) = client().parse_blog_posts_page(response).unwrap();
        assert_eq!(posts.len(), 1);
        let pagination = pagination.unwrap();
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.page_count, 4);
    }

    #[test]
    fn non_2xx_is_a_transport_error() {
        let response = HttpResponse {
            status: 503,
            headers: Vec::new(),
            body: "upstream down".to_string(),
        };
        let err = client().parse_testimonials(response).unwrap_err();
        assert!(matches!(err, ContentError::Transport { status: 503, .. }));
    }

    #[test]
    fn malformed_envelope_is_rejected_at_the_boundary() {
        let response = ok(json!({ "items": [] }));
        let err = client().parse_gallery_items(response).unwrap_err();
        assert!(matches!(err, ContentError::MalformedResponse(_)));
    }

    #[test]
    fn hero_singleton_null_data_is_none() {
        let response = ok(json!({ "data": null, "meta": {} }));
        let hero = client().parse_hero_section(response).unwrap();
        assert!(hero.is_none());
    }

    #[test]
    fn testimonials_parse_from_envelope() {
        let response = ok(json!({
            "data": [{
                "id": 3,
                "attributes": {
                    "name": "Sarah Chen",
                    "role": "Parent of Emma, Age 8",
                    "content": "Transformed my shy daughter into a confident performer.",
                    "rating": 5,
                    "featured": true,
                    "order": 1,
                    "createdAt": "2024-01-10T00:00:00Z",
                    "avatar": { "data": null }
                }
            }],
            "meta": {}
        }));
        let testimonials = client().parse_testimonials(response).unwrap();
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].rating, 5);
        assert!(testimonials[0].avatar.as_ref().is_none());
    }
}
