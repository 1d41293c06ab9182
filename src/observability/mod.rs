//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Every request runs inside a tower-http trace span tagged with its request id.
//! ```

pub mod logging;
