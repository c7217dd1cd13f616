//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use agriportal_auth::session::SessionManager;
use agriportal_core::config::AppConfig;
use agriportal_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, kept for the health probe.
    pub db_pool: PgPool,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Session-token lifecycle manager.
    pub session_manager: Arc<SessionManager>,
}
