//! Upstream response → client response.
//!
//! The gateway re-frames every body it relays, so the upstream's framing
//! headers would be wrong on the client connection.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::Response,
};

/// Headers describing the upstream connection rather than the message.
const FRAMING_HEADERS: [HeaderName; 3] = [
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
];

/// True for headers that must not be copied onto the relayed response.
pub fn is_framing_header(name: &HeaderName) -> bool {
    FRAMING_HEADERS.contains(name)
}

/// Build the relayed response: status and body verbatim, upstream headers
/// minus framing headers, `Content-Type` carried over explicitly.
pub fn relay_response(status: StatusCode, upstream: &HeaderMap, body: Bytes) -> Response {
    let mut headers = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if !is_framing_header(name) {
            headers.append(name.clone(), value.clone());
        }
    }

    if let Some(content_type) = upstream.get(header::CONTENT_TYPE) {
        headers.insert(header::CONTENT_TYPE, content_type.clone());
    }

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
