//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network; whoever owns the client (a `Transport`
//! implementation, a test, a UI shell) executes the actual round-trip.
//! The content API is read-only for this client, so every request is a GET
//! and no method field is carried.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely across threads and stored in view state.

/// A GET request against the CMS, described as plain data.
///
/// Built by `ContentClient::build_*` methods. `url` already contains the
/// encoded query string; `headers` carries `Content-Type` and, when an API
/// token is configured, the bearer `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executing side after the round-trip, then passed to
/// `ContentClient::parse_*` methods for envelope decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
