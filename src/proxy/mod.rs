//! Reverse proxy subsystem (`/api` → upstream origin).
//!
//! # Data Flow
//! ```text
//! /api/<suffix> request (body buffered by axum, size-limited)
//!     → handler.rs (logging, error boundary)
//!     → forward.rs (URL rewrite, header copy, one timed call)
//!     → relay.rs (strip framing headers, keep Content-Type)
//!     → client
//!
//! Transport failure at any step → 500 {"error": "API proxy error: ..."}
//! ```
//!
//! # Design Decisions
//! - Single attempt: no retries, no circuit breaking
//! - Redirects from the upstream are relayed, never followed
//! - No shared mutable state; the client pool is the only shared value

pub mod error;
pub mod forward;
pub mod handler;
pub mod relay;

pub use error::ProxyError;
pub use forward::{api_suffix, outbound_headers, Forwarder, API_PREFIX};
pub use relay::{is_framing_header, relay_response};
