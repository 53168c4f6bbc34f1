//! Iris Prediction Server Module
//!
//! HTTP server for the iris species prediction service. The classifier is
//! fitted once during startup; request handlers share the fitted model as
//! read-only state for the lifetime of the process.

mod api;
mod error;
mod handlers;
mod state;

pub use api::create_router;
pub use error::ServerError;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}

/// Start the server with the given configuration.
///
/// The model is fitted before the listener binds; a fit failure aborts
/// startup with an error.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let start_time = chrono::Utc::now();

    info!(started_at = %start_time.to_rfc3339(), "Fitting classifier on the embedded dataset");
    let state = Arc::new(AppState::initialize(config.clone())?);

    let metrics = state.engine.metrics();
    info!(
        model_id = %state.model_info.id,
        accuracy = metrics.and_then(|m| m.accuracy),
        training_time_secs = metrics.map(|m| m.training_time_secs),
        "Classifier fitted"
    );

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(
        host = %config.host,
        port = config.port,
        address = %addr,
        "Iris prediction server starting"
    );
    info!(url = %format!("http://{}/predict", addr), "Prediction endpoint available");
    info!(url = %format!("http://{}/health", addr), "Health endpoint available");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, pid = std::process::id(), "Server listening and ready to accept connections");

    // Graceful shutdown on ctrl+c
    let shutdown_signal = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        let stop_time = chrono::Utc::now();
        let uptime = stop_time.signed_duration_since(start_time);
        info!(
            stopped_at = %stop_time.to_rfc3339(),
            uptime_secs = uptime.num_seconds(),
            "Shutdown signal received, stopping server gracefully"
        );
    };

    info!("Server started successfully (press ctrl+c to stop)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
    }
}
