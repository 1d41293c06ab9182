//! Admin panel gateway library.
//!
//! Serves the admin panel's static files and forwards `/api` traffic to a
//! single upstream origin.

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routing;

// Request handling
pub mod assets;
pub mod proxy;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
