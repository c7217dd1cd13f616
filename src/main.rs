//! AgriPortal Server — authentication and profile service for the
//! farmer portal.
//!
//! Main entry point: loads configuration, initializes tracing, connects
//! to PostgreSQL, runs migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use agriportal_core::config::AppConfig;
use agriportal_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("AGRIPORTAL_ENV").unwrap_or_else(|_| "development".to_string());
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
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AgriPortal v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = agriportal_database::create_pool(&config.database).await?;

    agriportal_database::migration::run_migrations(&db_pool).await?;

    agriportal_api::run_server(config, db_pool).await
}
