//! Application assembly — wires repositories, auth components, and the
//! router into a running server.

use std::sync::Arc;

use sqlx::PgPool;

use agriportal_auth::jwt::{JwtDecoder, JwtEncoder};
use agriportal_auth::password::PasswordHasher;
use agriportal_auth::session::SessionManager;
use agriportal_core::config::AppConfig;
use agriportal_core::error::AppError;
use agriportal_database::repositories::user::UserRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

    let session_manager = Arc::new(SessionManager::new(
        Arc::new(JwtEncoder::new(&config.auth)),
        Arc::new(JwtDecoder::new(&config.auth)),
        Arc::clone(&user_repo),
        Arc::new(PasswordHasher::new()),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        user_repo,
        session_manager,
    }
}

/// Runs the AgriPortal server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AgriPortal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("AgriPortal server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
