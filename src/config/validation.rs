//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and upstream origin are usable
//! - Validate value ranges (timeout > 0, body limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("upstream.origin '{origin}' is invalid: {reason}")]
    UpstreamOrigin { origin: String, reason: String },

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("upstream.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(reason) = check_origin(&config.upstream.origin) {
        errors.push(ValidationError::UpstreamOrigin {
            origin: config.upstream.origin.clone(),
            reason,
        });
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.upstream.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The origin is joined with `/api/<suffix>`, so anything past the authority
/// would silently change the forwarded path.
fn check_origin(origin: &str) -> Result<(), String> {
    let url = Url::parse(origin).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err("must not contain a path, query or fragment".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn reports_every_problem() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "localhost".into();
        config.upstream.origin = "ftp://example.com".into();
        config.upstream.timeout_secs = 0;
        config.upstream.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], ValidationError::BindAddress("localhost".into()));
        assert!(matches!(errors[1], ValidationError::UpstreamOrigin { .. }));
        assert_eq!(errors[2], ValidationError::ZeroTimeout);
        assert_eq!(errors[3], ValidationError::ZeroBodyLimit);
    }

    #[test]
    fn origin_must_be_bare() {
        assert!(check_origin("http://127.0.0.1:9000").is_ok());
        assert!(check_origin("https://example.com/").is_ok());
        assert!(check_origin("https://example.com/api").is_err());
        assert!(check_origin("https://example.com?x=1").is_err());
        assert!(check_origin("not a url").is_err());
    }
}
