use std::path::PathBuf;

use hours_engine::api::{AppState, create_router};
use hours_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() {
    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server().log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bind_address = config.server().bind_address.clone();
    info!(
        config_dir = %config_dir.display(),
        standard_day_hours = config.hours_policy().standard_day_hours,
        absence_policy = ?config.hours_policy().absence_policy,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(bind_address = %bind_address, "Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    info!(bind_address = %bind_address, "Hours engine listening");
    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
