//! JWT token creation with per-kind signing secrets and TTLs.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use agriportal_core::config::auth::AuthConfig;
use agriportal_core::error::AppError;

use super::claims::Claims;

/// A freshly minted access/refresh pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Creates signed JWT access and refresh tokens.
///
/// The two token kinds are signed with distinct secrets so that
/// compromise of one does not compromise the other.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for access tokens.
    access_key: EncodingKey,
    /// HMAC secret key for refresh tokens.
    refresh_key: EncodingKey,
    /// Access token lifetime.
    access_ttl: Duration,
    /// Refresh token lifetime.
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: Duration::days(config.refresh_ttl_days as i64),
        }
    }

    /// Mint an access/refresh pair bound to the given user.
    pub fn generate_token_pair(&self, user_id: Uuid) -> Result<TokenPair, AppError> {
        let now = Utc::now();

        let access_token = self.sign(user_id, now.timestamp(), (now + self.access_ttl).timestamp(), &self.access_key, "access")?;
        let refresh_token = self.sign(user_id, now.timestamp(), (now + self.refresh_ttl).timestamp(), &self.refresh_key, "refresh")?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(
        &self,
        sub: Uuid,
        iat: i64,
        exp: i64,
        key: &EncodingKey,
        kind: &str,
    ) -> Result<String, AppError> {
        encode(&Header::default(), &Claims { sub, iat, exp }, key)
            .map_err(|e| AppError::internal(format!("Failed to encode {kind} token: {e}")))
    }
}
