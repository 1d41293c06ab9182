//! Startup errors. Request-time failures never surface here; they are turned
//! into HTTP responses at the handler boundary.

use thiserror::Error;

use crate::config::loader::join_errors;
use crate::config::{ConfigError, ValidationError};
use crate::net::listener::ListenerError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid command line override: {}", join_errors(.0))]
    Override(Vec<ValidationError>),

    /// The upstream HTTP client could not be built (TLS backend, resolver).
    #[error("HTTP client unavailable: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
