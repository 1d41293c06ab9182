use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::http::response::json_error;
use crate::http::server::AppState;

/// `/api`, `/api/` and `/api/{*path}`: one forwarding attempt per request.
pub async fn forward_api(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(
                method = %method,
                path = %uri.path(),
                status = rejection.status().as_u16(),
                "Request body rejected before forwarding"
            );
            return json_error(rejection.status(), rejection.body_text());
        }
    };

    let start = Instant::now();

    tracing::debug!(
        method = %method,
        path = %uri.path(),
        body_bytes = body.len(),
        "Forwarding request upstream"
    );

    match state.forwarder.forward(method, &uri, &headers, body).await {
        Ok(response) => {
            tracing::info!(
                status = response.status().as_u16(),
                elapsed = ?start.elapsed(),
                "Upstream responded"
            );
            response
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                timeout = e.is_timeout(),
                elapsed = ?start.elapsed(),
                "Upstream request failed"
            );
            e.into_response()
        }
    }
}
