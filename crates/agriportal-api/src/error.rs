//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use agriportal_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false` for errors.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code.
    pub code: String,
}

/// Newtype carrying an [`AppError`] across the Axum response boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts any
/// `AppError` on the way out.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status and fallback wire code for an error kind.
fn status_and_default_code(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Serialization
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "SERVER_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, default_code) = status_and_default_code(err.kind);

        if status.is_server_error() {
            tracing::error!(error = %err, source = ?err.source, "Internal server error");
        }

        let body = ApiErrorResponse {
            success: false,
            message: err.message,
            code: err.code.unwrap_or(default_code).to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = ApiError(AppError::validation("bad input")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError(AppError::authentication("nope")).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiError(AppError::authorization("no")).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = ApiError(AppError::not_found("gone")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError(AppError::database("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_default_codes() {
        assert_eq!(
            status_and_default_code(ErrorKind::Internal).1,
            "SERVER_ERROR"
        );
        assert_eq!(
            status_and_default_code(ErrorKind::Validation).1,
            "VALIDATION_ERROR"
        );
    }
}
