//! HTTP server for the Gmail connect backend.

pub mod gmail;
pub mod transport;

use std::net::SocketAddr;

use crate::config::Config;

/// Gmail connect HTTP server.
#[derive(Debug)]
pub struct GmailConnectServer {
    config: Config,
}

impl GmailConnectServer {
    /// Create a new server.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the HTTP server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error if the port cannot be bound or the server fails.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = transport::create_router(self.config);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
