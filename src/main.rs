//! Exercise Gateway
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request         ┌────────────────────────────────────────────┐
//!     ───────────────────────┼─▶ http::server ──▶ handlers / video         │
//!                            │                        │                   │
//!                            │                        ▼                   │
//!     Client Response        │                 upstream::client ─────────┼──▶ Exercise API
//!     ◀──────────────────────┼── http::response ◀─────┘                   │   (RapidAPI)
//!                            │                                            │
//!                            │  config · observability · lifecycle        │
//!                            └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use exercise_gateway::config::load_config;
use exercise_gateway::lifecycle::startup;
use exercise_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "exercise-gateway")]
#[command(about = "REST gateway for the exercise database API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address (e.g. 127.0.0.1:3000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability.log_level);
    tracing::info!("exercise-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
