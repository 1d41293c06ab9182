//! The fixed route table.
//!
//! # Responsibilities
//! - Map the five panel paths to their files
//! - Map `/api` and everything below it to the forwarder
//! - Answer 404 for the rest, 405 for methods a route does not accept

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, on, MethodFilter, MethodRouter},
    Router,
};

use crate::assets::handlers::{admin_file, admin_index, redirect_to_admin, script, stylesheet};
use crate::http::response::not_found;
use crate::http::server::AppState;
use crate::proxy::handler::forward_api;

/// Methods forwarded to the upstream. `HEAD` rides along with `GET`.
pub const API_METHODS: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE)
    .or(MethodFilter::OPTIONS);

/// Build the gateway's route table.
///
/// Static routes are listed first; `/api` routes only ever reach the proxy.
/// `{*path}` does not match an empty remainder, so the trailing-slash forms
/// are registered explicitly.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(redirect_to_admin))
        .route("/admin", get(admin_index))
        .route("/admin/", get(admin_index))
        .route("/admin/{*path}", get(admin_file))
        .route("/styles.css", get(stylesheet))
        .route("/script.js", get(script))
        .route("/api", api_route(max_body_bytes))
        .route("/api/", api_route(max_body_bytes))
        .route("/api/{*path}", api_route(max_body_bytes))
        .fallback(not_found)
        .with_state(state)
}

fn api_route(max_body_bytes: usize) -> MethodRouter<AppState> {
    on(API_METHODS, forward_api).layer(DefaultBodyLimit::max(max_body_bytes))
}
