//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the immutable application state once at startup
//! - Create the Axum router with the fixed route table
//! - Wire up middleware (request id, tracing)
//! - Serve on a listener until shutdown is signalled

use axum::{body::Body, http::Request, middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::assets::AdminAssets;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::http::request::{assign_request_id, RequestIdExt};
use crate::proxy::Forwarder;
use crate::routing::build_router;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub assets: Arc<AdminAssets>,
    pub forwarder: Forwarder,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails only when the upstream HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let assets = Arc::new(AdminAssets::open(&config.admin.root));
        let forwarder = Forwarder::new(&config.upstream).map_err(GatewayError::Client)?;

        tracing::info!(
            admin_root = %assets.root().display(),
            upstream = %forwarder.origin(),
            timeout_secs = config.upstream.timeout_secs,
            "Gateway initialised"
        );

        let state = AppState { assets, forwarder };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        build_router(state, config.upstream.max_body_bytes)
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .request_id()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                tracing::info_span!(
                    "request",
                    request_id = %request_id,
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }))
            .layer(middleware::from_fn(assign_request_id))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
