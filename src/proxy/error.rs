use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response::json_error;

/// Errors raised while forwarding a request upstream.
///
/// Every variant is a single failed attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Connect, DNS, TLS, timeout or body-read failure.
    #[error("{}", error_chain(.0))]
    Upstream(#[from] reqwest::Error),

    /// The upstream URL could not be built from the request path.
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ProxyError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProxyError::Upstream(e) if e.is_timeout())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("API proxy error: {self}"),
        )
    }
}

/// reqwest keeps the interesting part ("operation timed out", "connection
/// refused") in the source chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
