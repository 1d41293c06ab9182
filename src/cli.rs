use clap::Parser;
use std::path::PathBuf;

use admin_gateway::config::{load_config, validate_config, GatewayConfig};
use admin_gateway::GatewayError;

#[derive(Parser, Debug)]
#[command(
    name = "admin-gateway",
    version,
    about = "Serves the admin panel and forwards /api to the upstream service"
)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address (overrides config file setting)
    #[arg(long)]
    pub bind: Option<String>,

    /// Upstream origin, e.g. https://api.example.com (overrides config file setting)
    #[arg(long)]
    pub upstream: Option<String>,

    /// Directory holding the admin panel files (overrides config file setting)
    #[arg(long)]
    pub admin_root: Option<PathBuf>,
}

impl Cli {
    /// Load the file (if any), apply overrides, validate the result.
    pub fn resolve_config(&self) -> Result<GatewayConfig, GatewayError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GatewayConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(upstream) = &self.upstream {
            config.upstream.origin = upstream.clone();
        }
        if let Some(root) = &self.admin_root {
            config.admin.root = root.clone();
        }

        validate_config(&config).map_err(GatewayError::Override)?;
        Ok(config)
    }
}
