//! Envelope API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request ──▶ request ID ─▶ trace ─▶ timeout ─▶ body limit ─▶ handler
//!                                                                          │
//!                                                            EnvelopeBuilder
//!                                                      (code, httpCodes, callback)
//!                                                                          │
//!     Client Response ◀──────────── JSON / JSONP body + status line ◀──────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use api_envelope::config::{load_config, validate_config, ConfigError, ServiceConfig};
use api_envelope::http::HttpServer;
use api_envelope::lifecycle::{signals, Shutdown};
use api_envelope::observability::logging;
use api_envelope::ServerError;

#[derive(Parser)]
#[command(name = "api-envelope")]
#[command(about = "HTTP API server answering with uniform response envelopes", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "api-envelope starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        jsonp_enabled = config.envelope.jsonp_enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown));

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
