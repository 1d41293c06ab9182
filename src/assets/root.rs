//! Admin root directory and traversal-safe file resolution.
//!
//! # Responsibilities
//! - Canonicalize the admin root on every lookup, so a root created after
//!   startup is picked up
//! - Map request-relative paths to files inside the root
//! - Reject anything that would leave the root
//!
//! # Design Decisions
//! - Lexical check first: `..`, absolute and prefixed components never reach the filesystem
//! - Canonical check second: symlinks pointing outside the root are refused too
//! - Directories are not listed; they resolve to 404

use axum::body::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::assets::error::AssetError;
use crate::assets::mime::content_type_for;

/// A file loaded from the admin root.
#[derive(Debug, Clone)]
pub struct StaticFile {
    pub body: Bytes,
    pub content_type: &'static str,
}

/// The directory the admin panel is served from.
#[derive(Debug, Clone)]
pub struct AdminAssets {
    root: PathBuf,
}

impl AdminAssets {
    /// Open the admin root.
    ///
    /// A missing root is not fatal: the gateway still proxies `/api`, and every
    /// static route answers 404 until the directory appears.
    pub fn open(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = match std::fs::canonicalize(root) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(
                    root = %root.display(),
                    error = %e,
                    "Admin root is not accessible; static routes will return 404"
                );
                // Pin relative roots to the startup working directory.
                std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
            }
        };
        Self { root }
    }

    /// The admin root as configured, canonical when it existed at startup.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request-relative path to a file inside the admin root.
    pub async fn resolve(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let clean = sanitize(relative)?;
        if clean.as_os_str().is_empty() {
            return Err(AssetError::NotFound(relative.to_string()));
        }

        let root = fs::canonicalize(&self.root)
            .await
            .map_err(|_| AssetError::NotFound(relative.to_string()))?;
        let candidate = root.join(&clean);
        let canonical = fs::canonicalize(&candidate)
            .await
            .map_err(|_| AssetError::NotFound(relative.to_string()))?;

        if !canonical.starts_with(&root) {
            return Err(AssetError::Forbidden(relative.to_string()));
        }

        let metadata = fs::metadata(&canonical)
            .await
            .map_err(|_| AssetError::NotFound(relative.to_string()))?;
        if !metadata.is_file() {
            return Err(AssetError::NotFound(relative.to_string()));
        }

        Ok(canonical)
    }

    /// Resolve and read a file, pairing it with its content type.
    pub async fn load(&self, relative: &str) -> Result<StaticFile, AssetError> {
        let path = self.resolve(relative).await?;
        let body = fs::read(&path).await.map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(StaticFile {
            body: Bytes::from(body),
            content_type: content_type_for(&path),
        })
    }
}

/// Strip `.` components and refuse any component that climbs out of, or
/// replaces, the base directory.
fn sanitize(relative: &str) -> Result<PathBuf, AssetError> {
    let mut clean = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetError::Forbidden(relative.to_string()));
            }
        }
    }
    Ok(clean)
}
