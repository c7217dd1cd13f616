//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// Always answers 200; an unreachable database is reported in the body
/// so load balancers keep routing while operators see the degradation.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = match agriportal_database::connection::ping(&state.db_pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health probe could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        success: true,
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        database: if database_up {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
