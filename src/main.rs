//! healthcheck-server: a liveness endpoint for orchestrator probes.
//!
//! This is the application entry point. It initializes tracing, builds the
//! route table and then binds the fixed listen address. A bind failure is
//! returned from `main` and terminates the process with a non-zero status.

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthcheck_server::config::{DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT};
use healthcheck_server::http::start_server;
use healthcheck_server::routes::create_router;

/// healthcheck-server: answers GET /_health on port 8080
#[derive(Parser, Debug)]
#[command(name = "healthcheck-server", version, about)]
struct Args {
    /// Log level filter (e.g., "healthcheck_server=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = DEFAULT_LOG_FORMAT)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    // Route table is complete before the listener exists
    let app = create_router();

    start_server(app).await?;

    Ok(())
}
