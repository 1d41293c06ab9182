//! Static file subsystem (admin panel).
//!
//! # Data Flow
//! ```text
//! GET /admin/<path>
//!     → handlers.rs (route → relative path)
//!     → root.rs (sanitize, canonicalize, confine to admin root)
//!     → mime.rs (extension → Content-Type)
//!     → 200 with bytes | 304 | 403 | 404
//! ```
//!
//! # Design Decisions
//! - Fixed route table; no directory listings
//! - Traversal is refused before and after canonicalization
//! - Files are read per request; nothing is cached in memory

pub mod error;
pub mod handlers;
pub mod mime;
pub mod root;

pub use error::AssetError;
pub use root::{AdminAssets, StaticFile};
