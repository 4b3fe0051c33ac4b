//! RePitchBook: property presentation slides over HTTP.
//!
//! This is the application entry point. It loads configuration, initializes
//! tracing, compiles the slide templates, sets up the Axum router and starts
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use repitchbook::config::{AppConfig, DEFAULT_LOG_FILTER};
use repitchbook::http::start_server;
use repitchbook::{create_router, AppState};

/// RePitchBook: turns property details into presentation slides
#[derive(Parser, Debug)]
#[command(name = "repitchbook", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "repitchbook=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging format comes from the config, so load it first
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    match config.gateway.engine_url.as_deref() {
        Some(url) => tracing::info!(%url, "Pitch gateway forwards to upstream slide engine"),
        None => tracing::info!("Pitch gateway uses in-process slide engine"),
    }

    let http_config = config.http.clone();
    let state = AppState::from_config(config)?;
    tracing::info!("Initialized templates");

    let app = create_router(state);
    start_server(app, &http_config).await?;

    Ok(())
}
