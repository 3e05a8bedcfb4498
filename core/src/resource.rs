//! The per-source loading/error state machine shared by every view.
//!
//! # Design
//! `Idle → Loading → Ready(data) | Failed(message)`. One `Resource` per
//! data source; a view with several sources holds several resources and
//! resolves each independently, so one failed fetch never disturbs the
//! others. Failures are logged here — the view boundary is the only place
//! in the crate that catches an error instead of propagating it.

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// No fetch issued yet.
    Idle,
    /// Fetch in flight; the section renders a loading indicator.
    Loading,
    /// Fetch succeeded.
    Ready(T),
    /// Fetch failed; carries the short user-facing message.
    Failed(String),
}

impl<T> Resource<T> {
    /// Mark the source as in flight. A later `resolve` completes it; a
    /// result arriving for an unmounted view is simply dropped by the host.
    pub fn start(&mut self) {
        *self = Resource::Loading;
    }

    /// Complete the fetch. Errors are logged and reduced to the given
    /// user-facing message; the data (or the error) stays scoped to this
    /// one source.
    pub fn resolve(&mut self, result: Result<T, ContentError>, message: &str) {
        *self = match result {
            Ok(value) => Resource::Ready(value),
            Err(error) => {
                tracing::error!(%error, "content fetch failed");
                Resource::Failed(message.to_string())
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Resource::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Idle
    }
}
