//! JWT token validation against the per-kind signing secrets.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use agriportal_core::config::auth::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for access tokens.
    access_key: DecodingKey,
    /// HMAC secret key for refresh tokens.
    refresh_key: DecodingKey,
    /// Validation configuration shared by both token kinds.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token one second past expiry is already invalid.
        validation.leeway = 0;

        Self {
            access_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and verifies an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_with(token, &self.access_key)
    }

    /// Decodes and verifies a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_with(token, &self.refresh_key)
    }

    fn decode_with(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, key, &self.validation).map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                JwtErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use agriportal_core::config::auth::AuthConfig;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(user_id).unwrap();

        let access = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(access.user_id(), user_id);

        let refresh = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.user_id(), user_id);
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).unwrap();

        assert_eq!(
            decoder.decode_refresh_token(&pair.access_token),
            Err(TokenError::SignatureMismatch)
        );
        assert_eq!(
            decoder.decode_access_token(&pair.refresh_token),
            Err(TokenError::SignatureMismatch)
        );
    }

    #[test]
    fn test_expired_token_is_expired_not_malformed() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.access_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            decoder.decode_access_token(&token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_unexpired_boundary_is_accepted() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now,
            exp: now + 2,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.access_secret.as_bytes()),
        )
        .unwrap();

        assert!(decoder.decode_access_token(&token).is_ok());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let decoder = JwtDecoder::new(&test_config());
        assert_eq!(
            decoder.decode_access_token("not-a-jwt"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_tampered_signature_is_mismatch() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).unwrap();

        // Reverse the payload segment; the signature no longer covers the
        // altered bytes.
        let parts: Vec<&str> = pair.access_token.split('.').collect();
        let payload: String = parts[1].chars().rev().collect();
        let tampered = format!("{}.{}.{}", parts[0], payload, parts[2]);

        assert_eq!(
            decoder.decode_access_token(&tampered),
            Err(TokenError::SignatureMismatch)
        );
    }
}
