//! AI Playlist Generator server
//!
//! Entry point: loads configuration, initializes logging and serves the app.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use playlist_generator::{config::AppConfig, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    tracing::info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        cors_origins = config.cors.origins.len(),
        "Configuration loaded"
    );

    server::start_server(config).await
}
