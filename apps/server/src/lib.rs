//! # Home Price Estimation Server
//!
//! Serves a pre-trained linear regression model over HTTP with `Axum`.
//! Artifacts are loaded once at startup; the server refuses to bind if
//! either artifact is missing or malformed.
//!
//! ## Example
//! ```no_run
//! use homeval_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(5000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod config;
mod error;
pub mod router;
mod routes;
pub mod state;

pub use crate::config::{ConfigError, load_config};

use crate::state::ApiState;
use anyhow::{Context, Result};
use axum_server::Handle;
use homeval_domain::config::ApiConfig;
use homeval_engine::Estimator;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Loads the column schema and regression model artifacts
    /// 2. Cross-checks the artifact pair (schema width vs model width)
    /// 3. Constructs the shared application state
    ///
    /// # Errors
    /// Returns an error if either artifact is missing, malformed, or the
    /// pair is inconsistent. This is fatal: the process must not begin
    /// accepting requests in a partially-initialized state.
    pub fn build(self) -> Result<Server> {
        let artifacts = &self.cfg.artifacts;

        info!(
            schema = %artifacts.schema.display(),
            model = %artifacts.model.display(),
            "Loading saved artifacts"
        );

        let estimator = Estimator::load(&artifacts.schema, &artifacts.model)
            .context("Failed to load training artifacts")?;

        info!(
            total_locations = estimator.locations().len(),
            total_features = estimator.schema().size(),
            "Model and artifacts loaded"
        );

        Ok(Server { state: ApiState::new(self.cfg, estimator) })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured
    /// address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = router::init(self.state);

        // Graceful shutdown on SIGINT/SIGTERM
        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
