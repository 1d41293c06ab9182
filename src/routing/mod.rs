//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (fixed table, compiled once at startup)
//!     → assets handlers  (/, /admin, /admin/*, /styles.css, /script.js)
//!     → proxy handler    (/api, /api/*)
//!     → fallback 404
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exactly one handler per request; the two halves share no state
//! - Deterministic: same input always matches same route

pub mod router;

pub use router::{build_router, API_METHODS};
