//! Iris Predictor - Main Entry Point
//!
//! Fits the classifier at startup and serves the prediction API.

use clap::Parser;
use iris_predictor::server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "iris-predictor", version, about = "Iris species prediction API server")]
struct Cli {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iris_predictor=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::default();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    run_server(config).await
}
