use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while serving an admin panel file.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No regular file at the requested path.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The requested path would leave the admin root.
    #[error("path escapes admin root: {0}")]
    Forbidden(String),

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub fn status(&self) -> StatusCode {
        match self {
            AssetError::NotFound(_) => StatusCode::NOT_FOUND,
            AssetError::Forbidden(_) => StatusCode::FORBIDDEN,
            AssetError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AssetError::NotFound(path) => tracing::debug!(path = %path, "Static file not found"),
            AssetError::Forbidden(path) => {
                tracing::warn!(path = %path, "Path traversal attempt blocked")
            }
            AssetError::Io { .. } => tracing::error!(error = %self, "Static file read failed"),
        }

        let reason = status.canonical_reason().unwrap_or_default();
        (status, reason).into_response()
    }
}
