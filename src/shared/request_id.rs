//! Request correlation ID
//!
//! The HTTP middleware scopes each request's handling with its ID so that
//! error bodies can echo it back without threading it through every handler.

use axum::http::HeaderValue;
use uuid::Uuid;

tokio::task_local! {
    static CURRENT_REQUEST_ID: RequestId;
}

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse an incoming header value if it is printable and not blank
    #[must_use]
    pub fn from_header(value: &HeaderValue) -> Option<Self> {
        value
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Run `fut` with this ID as the current request ID
    pub async fn scope<F: std::future::Future>(self, fut: F) -> F::Output {
        CURRENT_REQUEST_ID.scope(self, fut).await
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// ID of the request being handled, if any
#[must_use]
pub fn current_request_id() -> Option<String> {
    CURRENT_REQUEST_ID.try_with(|id| id.0.clone()).ok()
}
