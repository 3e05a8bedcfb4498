//! Read-only client core for a headless-CMS-backed marketing site.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `{data, meta}` envelope responses
//! for a Strapi-style CMS without touching the network (host-does-IO
//! pattern). The caller executes the HTTP round-trip — directly or through
//! the [`transport::Transport`] seam — keeping the core deterministic and
//! testable against a fake transport.
//!
//! # Design
//! - `ContentClient` is stateless: base URL plus optional bearer token.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - The `{id, attributes}` envelope flattens at the `envelope`/`relation`
//!   boundary; malformed payloads are rejected there, never downstream.
//! - Views (`views`, `resource`) are the sole recovery boundary: they log
//!   failures and substitute static `fallback` content. Everything below
//!   them propagates errors with `?`.
//! - Content models are defined independently of the mock CMS crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod display;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod http;
pub mod media;
pub mod models;
pub mod query;
pub mod relation;
pub mod resource;
pub mod transport;
pub mod views;

pub use client::{BlogPostQuery, ContentClient, EventQuery, GalleryQuery};
pub use config::{ClientConfig, ConfigError};
pub use error::ContentError;
pub use http::{HttpRequest, HttpResponse};
pub use media::{Media, MediaResolver};
pub use query::{Op, Query};
pub use relation::{PostsRef, Relation, Relations};
pub use resource::Resource;
pub use transport::{Transport, UreqTransport};
