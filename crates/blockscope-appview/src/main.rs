//! Blockscope AppView - who blocks this account?
//!
//! Serves a JSON API that resolves an AT Protocol handle or DID and lists
//! the accounts blocking it, enriched with their profiles.

mod config;
mod error;
mod routes;
mod server;
mod state;
mod views;

use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blockscope_appview=info,blockscope_enrichment=info"));

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    let config = Config::from_env();
    info!(
        port = config.port,
        slingshot = %config.slingshot_url,
        constellation = %config.constellation_url,
        "Starting blockscope-appview"
    );

    let state = AppState::from_config(&config).expect("Failed to create HTTP client");
    let router = server::create_router(state, &config.cors_origins);

    server::start_server(router, config.port)
        .await
        .expect("Server failed");
}
