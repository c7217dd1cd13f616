//! `AuthUser` extractor — the per-request authentication gate.
//!
//! Pulls the bearer token from the `Authorization` header, verifies it
//! cryptographically, cross-checks the user's access-token allowlist, and
//! injects the resolved user plus the raw token into the handler.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use agriportal_core::error::AppError;
use agriportal_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved user.
    pub user: User,
    /// The raw access token that authenticated this request.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());

        let token = bearer_token(header)?;

        let user = state.session_manager.authenticate(token).await?;

        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

/// Extracts the bearer token from an `Authorization` header value.
///
/// The `Bearer ` prefix is optional, matching the portal's historical
/// clients; a missing header and an empty token are distinct rejections.
fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| {
        AppError::authentication("Authorization header missing").with_code("MISSING_AUTH_HEADER")
    })?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

    if token.is_empty() {
        return Err(AppError::authentication("No token provided").with_code("NO_TOKEN_PROVIDED"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header() {
        let err = bearer_token(None).unwrap_err();
        assert_eq!(err.code, Some("MISSING_AUTH_HEADER"));
    }

    #[test]
    fn test_empty_token() {
        let err = bearer_token(Some("Bearer ")).unwrap_err();
        assert_eq!(err.code, Some("NO_TOKEN_PROVIDED"));

        let err = bearer_token(Some("   ")).unwrap_err();
        assert_eq!(err.code, Some("NO_TOKEN_PROVIDED"));
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_prefix_optional() {
        assert_eq!(bearer_token(Some("abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
