//! Error types for the CMS content client.
//!
//! # Design
//! "Not found" is deliberately absent from this taxonomy: a filtered query
//! that matches zero records is an empty result, not a failure, and the
//! client surfaces it as `Ok(None)` / an empty collection. Everything that
//! actually is a failure lands in one of three variants: the server said no
//! (`Transport`), the network said no (`Network`), or the payload did not
//! have the `{data, attributes}` shape the CMS contract promises
//! (`MalformedResponse`).

use thiserror::Error;

/// Errors returned by the content client and transport layer.
///
/// None of these are fatal to the process: views catch them, log them and
/// substitute fallback content. Layers below the view never catch.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The CMS returned a non-2xx status. Carries the raw status and body
    /// for logging at the view boundary.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The HTTP round-trip itself failed (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a well-formed CMS envelope, or an
    /// attribute did not match the expected content shape. Rejected at the
    /// normalizer boundary rather than propagated downstream.
    #[error("malformed CMS response: {0}")]
    MalformedResponse(String),
}
