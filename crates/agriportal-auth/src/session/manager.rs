//! Session lifecycle manager — signup, login, logout, refresh, and the
//! per-request authentication check.
//!
//! A token authenticates only when it verifies cryptographically AND its
//! raw string is still present in the user's corresponding allowlist.
//! Issuance appends to the allowlists, logout clears them, refresh spends
//! the old refresh token and appends a fresh pair.

use std::sync::Arc;

use tracing::{info, warn};

use agriportal_core::error::{AppError, ErrorKind};
use agriportal_database::repositories::user::UserRepository;
use agriportal_entity::user::model::CreateUser;
use agriportal_entity::user::{SoilType, User, UserRole};

use crate::jwt::{JwtDecoder, JwtEncoder, TokenError, TokenPair};
use crate::password::PasswordHasher;

/// Input for account creation. The password is still raw at this point.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Raw password.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Land size in acres.
    pub land_size: f64,
    /// Soil classification.
    pub soil_type: SoilType,
}

/// Result of a successful signup, login, or refresh.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The user row after the allowlist update.
    pub user: User,
}

/// Manages the complete session-token lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// User repository (credential store + allowlists).
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            user_repo,
            password_hasher,
        }
    }

    /// Creates an account and issues its first token pair.
    ///
    /// Rejects the `admin` role outright and duplicate emails
    /// (case-insensitively). The password is hashed before anything is
    /// persisted.
    pub async fn signup(&self, account: NewAccount) -> Result<AuthSession, AppError> {
        if account.role.is_admin() {
            return Err(
                AppError::authorization("Admin role cannot be assigned via signup")
                    .with_code("INVALID_ROLE"),
            );
        }

        let email = account.email.trim().to_lowercase();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Email already in use").with_code("EMAIL_IN_USE"));
        }

        let password_hash = self.password_hasher.hash_password(&account.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: account.name.trim().to_string(),
                email,
                password_hash,
                role: account.role,
                phone: account.phone,
                location: account.location,
                land_size: account.land_size,
                soil_type: account.soil_type,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        self.issue(user).await
    }

    /// Verifies credentials and issues a fresh token pair.
    ///
    /// Unknown email and wrong password produce the identical failure so
    /// the endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        info!(user_id = %user.id, "Login successful");

        self.issue(user).await
    }

    /// Revokes every outstanding token for the user named by the refresh
    /// token.
    ///
    /// The token must carry a valid signature and be unexpired, but it is
    /// deliberately *not* required to still be in the allowlist: a second
    /// logout with an already-spent token still clears the (empty) lists.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let claims = self
            .jwt_decoder
            .decode_refresh_token(refresh_token)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Logout failed", e)
                    .with_code("LOGOUT_FAILED")
            })?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid user").with_code("INVALID_USER"))?;

        self.user_repo.clear_tokens(user.id).await?;

        info!(user_id = %user.id, "All tokens revoked on logout");

        Ok(())
    }

    /// Exchanges a refresh token for a new access/refresh pair.
    ///
    /// The old refresh token is single-use: it is removed from the
    /// allowlist in the same statement that records the new pair, so a
    /// replayed token (including the loser of two concurrent refreshes)
    /// is reported as revoked.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let claims = self
            .jwt_decoder
            .decode_refresh_token(refresh_token)
            .map_err(|e| match e {
                TokenError::Expired => AppError::authentication("Refresh token expired")
                    .with_code("REFRESH_TOKEN_EXPIRED"),
                TokenError::Malformed | TokenError::SignatureMismatch => {
                    AppError::authentication("Invalid refresh token")
                        .with_code("INVALID_REFRESH_TOKEN")
                }
            })?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| {
                AppError::authentication("Invalid refresh token").with_code("INVALID_REFRESH_TOKEN")
            })?;

        if !user.honors_refresh_token(refresh_token) {
            warn!(user_id = %user.id, "Replay of a spent refresh token");
            return Err(refresh_token_revoked());
        }

        let tokens = self.jwt_encoder.generate_token_pair(user.id)?;

        let user = self
            .user_repo
            .rotate_refresh_tokens(
                user.id,
                refresh_token,
                &tokens.access_token,
                &tokens.refresh_token,
            )
            .await?
            // A concurrent refresh spent the token between the membership
            // check and the guarded update.
            .ok_or_else(refresh_token_revoked)?;

        info!(user_id = %user.id, "Refresh token rotated");

        Ok(AuthSession { tokens, user })
    }

    /// Validates an access token and resolves its user.
    ///
    /// Rejections are distinct so clients can tell an expired token (call
    /// refresh) from a revoked one (force re-login).
    pub async fn authenticate(&self, access_token: &str) -> Result<User, AppError> {
        let claims = self
            .jwt_decoder
            .decode_access_token(access_token)
            .map_err(|e| match e {
                TokenError::Expired => {
                    AppError::authentication("Token has expired").with_code("TOKEN_EXPIRED")
                }
                TokenError::Malformed | TokenError::SignatureMismatch => {
                    AppError::authentication("Invalid token").with_code("INVALID_TOKEN")
                }
            })?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| {
                AppError::authentication("User not found for this token")
                    .with_code("USER_NOT_FOUND")
            })?;

        if !user.honors_access_token(access_token) {
            return Err(
                AppError::authentication("Token is no longer valid").with_code("TOKEN_REVOKED")
            );
        }

        Ok(user)
    }

    /// Mints a token pair and records it in the user's allowlists.
    async fn issue(&self, user: User) -> Result<AuthSession, AppError> {
        let tokens = self.jwt_encoder.generate_token_pair(user.id)?;

        let user = self
            .user_repo
            .append_tokens(user.id, &tokens.access_token, &tokens.refresh_token)
            .await?;

        Ok(AuthSession { tokens, user })
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid login credentials").with_code("LOGIN_FAILED")
}

fn refresh_token_revoked() -> AppError {
    AppError::authentication("Refresh token revoked").with_code("REFRESH_TOKEN_REVOKED")
}
