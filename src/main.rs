//! admin-gateway
//!
//! ```text
//!     Client ──▶ listener :8080 ──▶ router ─┬─▶ /, /admin, /admin/*, /styles.css, /script.js
//!                                           │       └─▶ admin root on local disk
//!                                           │
//!                                           └─▶ /api, /api/*
//!                                                   └─▶ upstream origin /api/* (10 s, no redirects)
//! ```

mod cli;

use clap::Parser;

use admin_gateway::lifecycle::{signals, Shutdown};
use admin_gateway::observability::logging;
use admin_gateway::{net, GatewayError, GatewayServer};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&config.observability.log_level);

    tracing::info!("admin-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        admin_root = %config.admin.root.display(),
        upstream = %config.upstream.origin,
        "Configuration loaded"
    );

    let server = GatewayServer::new(config)?;
    let listener = net::bind(&server.config().listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
