//! The executing side of the host-does-IO split.
//!
//! # Design
//! `Transport` is the seam between the deterministic core and the network:
//! views and tests depend on the trait, production code plugs in
//! [`UreqTransport`]. The transport never interprets status codes — ureq's
//! status-as-error behavior is disabled so 4xx/5xx responses come back as
//! data and the client's `parse_*` methods decide what they mean. No
//! retries, no caching, no request deduplication.

use crate::error::ContentError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a built [`HttpRequest`] and returns the raw response.
pub trait Transport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ContentError>;
}

/// Blocking HTTP transport over a shared [`ureq::Agent`].
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ContentError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ContentError::Network(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned transport returning one prepared result.
    struct FakeTransport(Result<HttpResponse, ContentError>);

    impl Transport for FakeTransport {
        fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, ContentError> {
            match &self.0 {
                Ok(response) => Ok(response.clone()),
                Err(ContentError::Network(msg)) => Err(ContentError::Network(msg.clone())),
                Err(ContentError::Transport { status, body }) => Err(ContentError::Transport {
                    status: *status,
                    body: body.clone(),
                }),
                Err(ContentError::MalformedResponse(msg)) => {
                    Err(ContentError::MalformedResponse(msg.clone()))
                }
            }
        }
    }

    #[test]
    fn fake_transport_substitutes_for_the_real_one() {
        let transport = FakeTransport(Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"data": [], "meta": {}}"#.to_string(),
        }));
        let request = HttpRequest { url: "http://unused".to_string(), headers: Vec::new() };
        let response = transport.get(&request).unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn network_failure_maps_to_network_error() {
        // Port 1 on localhost is never listening.
        let transport = UreqTransport::new();
        let request = HttpRequest {
            url: "http://127.0.0.1:1/api/tags".to_string(),
            headers: Vec::new(),
        };
        let err = transport.get(&request).unwrap_err();
        assert!(matches!(err, ContentError::Network(_)));
    }
}
