//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! config.listener.bind_address
//!     → listener.rs (parse, bind, log)
//!     → Hand off to HTTP layer (axum::serve)
//! ```
//!
//! TLS is terminated in front of the gateway, never here.

pub mod listener;

pub use listener::{bind, ListenerError};
