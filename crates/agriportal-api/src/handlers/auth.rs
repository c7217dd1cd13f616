//! Auth lifecycle handlers — signup, login, logout, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use agriportal_auth::session::NewAccount;
use agriportal_core::error::{AppError, ErrorKind};
use agriportal_entity::user::UserRole;

use crate::dto::request::{LoginRequest, RefreshTokenRequest, SignupRequest};
use crate::dto::response::{AuthResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (name, email, password) = match (&req.name, &req.email, &req.password) {
        (Some(name), Some(email), Some(password))
            if !name.trim().is_empty() && !email.trim().is_empty() && !password.is_empty() =>
        {
            (name.clone(), email.clone(), password.clone())
        }
        _ => {
            return Err(AppError::validation("Name, email, and password are required")
                .with_code("MISSING_REQUIRED_FIELDS")
                .into());
        }
    };

    req.validate()
        .map_err(|e| AppError::validation(flatten_validation(&e)))?;

    let role = match req.role.as_deref() {
        None | Some("") => UserRole::default(),
        Some(raw) => raw.parse::<UserRole>()?,
    };

    let session = state
        .session_manager
        .signup(NewAccount {
            name,
            email,
            password,
            role,
            phone: req.phone,
            location: req.location,
            land_size: req.land_size.unwrap_or(0.0),
            soil_type: req.soil_type.unwrap_or_default(),
        })
        .await
        .map_err(|e| match e.kind {
            ErrorKind::Database | ErrorKind::Internal if e.code.is_none() => {
                e.with_code("REGISTRATION_FAILED")
            }
            _ => e,
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(
            session.tokens.access_token,
            session.tokens.refresh_token,
            session.user,
            "Registration successful",
        )),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (email, password) = match (&req.email, &req.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::validation("Email and password are required")
                .with_code("MISSING_CREDENTIALS")
                .into());
        }
    };

    let session = state.session_manager.login(email, password).await?;

    Ok(Json(AuthResponse::new(
        session.tokens.access_token,
        session.tokens.refresh_token,
        session.user,
        "Login successful",
    )))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let refresh_token = require_refresh_token(req.refresh_token.as_deref())?;

    state.session_manager.logout(refresh_token).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}

/// POST /auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let refresh_token = require_refresh_token(req.refresh_token.as_deref())?;

    let session = state.session_manager.refresh(refresh_token).await?;

    Ok(Json(AuthResponse::new(
        session.tokens.access_token,
        session.tokens.refresh_token,
        session.user,
        "Token refreshed successfully",
    )))
}

fn require_refresh_token(token: Option<&str>) -> Result<&str, AppError> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::validation("Refresh token is required")
            .with_code("MISSING_REFRESH_TOKEN")),
    }
}

/// Collapses validator output into a single message line.
fn flatten_validation(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_refresh_token() {
        assert!(require_refresh_token(Some("tok")).is_ok());

        let err = require_refresh_token(None).unwrap_err();
        assert_eq!(err.code, Some("MISSING_REFRESH_TOKEN"));

        let err = require_refresh_token(Some("")).unwrap_err();
        assert_eq!(err.code, Some("MISSING_REFRESH_TOKEN"));
    }

    #[test]
    fn test_short_password_fails_validation() {
        let req = SignupRequest {
            name: Some("Asha".to_string()),
            email: Some("a@x.com".to_string()),
            password: Some("short".to_string()),
            role: None,
            phone: None,
            location: None,
            land_size: None,
            soil_type: None,
        };
        assert!(req.validate().is_err());
    }
}
