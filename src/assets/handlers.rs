//! Handlers for the admin panel's static routes.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::assets::root::{AdminAssets, StaticFile};
use crate::http::server::AppState;

/// Where `/` sends browsers.
pub const ADMIN_PATH: &str = "/admin";

/// `GET /` → 302 to the panel.
pub async fn redirect_to_admin() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, ADMIN_PATH)]).into_response()
}

/// `GET /admin` and `GET /admin/`.
pub async fn admin_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state.assets, "index.html", &headers).await
}

/// `GET /admin/{*path}`.
pub async fn admin_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    serve(&state.assets, &path, &headers).await
}

/// `GET /styles.css`.
pub async fn stylesheet(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state.assets, "styles.css", &headers).await
}

/// `GET /script.js`.
pub async fn script(State(state): State<AppState>, headers: HeaderMap) -> Response {
    serve(&state.assets, "script.js", &headers).await
}

async fn serve(assets: &AdminAssets, relative: &str, headers: &HeaderMap) -> Response {
    match assets.load(relative).await {
        Ok(file) => file_response(file, headers.get(header::IF_NONE_MATCH)),
        Err(e) => e.into_response(),
    }
}

fn file_response(file: StaticFile, if_none_match: Option<&HeaderValue>) -> Response {
    let etag = etag_for(&file.body);

    if etag_matches(if_none_match, &etag) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        if let Ok(value) = HeaderValue::from_str(&etag) {
            response.headers_mut().insert(header::ETAG, value);
        }
        return response;
    }

    let mut response = (StatusCode::OK, file.body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(file.content_type),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    if let Ok(value) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, value);
    }
    response
}

/// Quoted content hash, stable for identical bytes within one build.
fn etag_for(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// `If-None-Match` may list several tags or be `*`.
fn etag_matches(if_none_match: Option<&HeaderValue>, etag: &str) -> bool {
    if_none_match
        .and_then(|v| v.to_str().ok())
        .is_some_and(|tags| {
            tags.split(',')
                .map(str::trim)
                .any(|tag| tag == etag || tag == "*")
        })
}
