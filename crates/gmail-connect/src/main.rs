//! Gmail Connect Backend - Entry Point

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gmail_connect::{config::Config, server::GmailConnectServer};

#[derive(Parser, Debug)]
#[command(name = "gmail-connect")]
#[command(about = "Gmail OAuth callback backend for the Found Money app")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Gmail connect backend");

    let config = Config::from_env();
    let missing = config.missing_variables();
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "Configuration incomplete; affected requests will fail until set"
        );
    }

    GmailConnectServer::new(config).run_http(cli.port).await
}
