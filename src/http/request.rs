//! Request identification.
//!
//! # Responsibilities
//! - Give every request an id for log correlation
//! - Reuse an inbound `x-request-id` when the caller supplied one
//!
//! # Design Decisions
//! - The id lives in request extensions only; it is never injected into
//!   forwarded or relayed headers, so the proxy stays byte-transparent

use axum::{
    body::Body,
    http::{HeaderName, Request},
    middleware::Next,
    response::Response,
};
use std::fmt;
use uuid::Uuid;

/// Header a caller may use to supply its own request id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id attached to each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Fresh UUID v4 id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_request<B>(request: &Request<B>) -> Self {
        request
            .headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_else(Self::generate)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access the request id stored by [`assign_request_id`].
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&RequestId>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions().get::<RequestId>()
    }
}

/// Middleware storing a [`RequestId`] in the request extensions.
pub async fn assign_request_id(mut request: Request<Body>, next: Next) -> Response {
    let id = RequestId::from_request(&request);
    request.extensions_mut().insert(id);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_inbound_id() {
        let request = Request::builder()
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(RequestId::from_request(&request).as_str(), "abc-123");
    }

    #[test]
    fn generates_uuid_when_absent() {
        let request = Request::builder().body(Body::empty()).unwrap();
        let id = RequestId::from_request(&request);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }
}
