//! Lost-property report portal server.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use lostprop_core::AppError;
use lostprop_core::config::AppConfig;
use lostprop_database::Stores;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `LOSTPROP__*` variables
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LOSTPROP_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting lost-property portal v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Persistence backend + bootstrap migration ────────
    tracing::info!(backend = %config.database.backend, "Connecting stores...");
    let stores = Stores::connect(&config.database).await?;

    // ── Step 2: HTTP server until shutdown ───────────────────────
    lostprop_api::run_server(config, stores).await?;

    tracing::info!("Portal server shut down gracefully");
    Ok(())
}
