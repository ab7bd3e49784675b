//! Placeholder backend service.
//!
//! This is the application entry point. It parses the command line, loads the
//! optional TOML configuration, initializes tracing, builds the Axum router,
//! and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::config::{resolve_log_filter, AppConfig, LoggingConfig};
use backend::http::start_server;
use backend::routes::create_router;

/// Placeholder backend answering liveness probes on GET /health
#[derive(Parser, Debug)]
#[command(name = "backend", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "backend=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host
    #[arg(long)]
    host: Option<String>,

    /// Override http.port
    #[arg(long)]
    port: Option<u16>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())?
        .with_overrides(args.host, args.port);

    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, &config.logging);

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    let app = create_router();

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        "Starting server"
    );
    start_server(app, &config.http).await?;

    Ok(())
}
