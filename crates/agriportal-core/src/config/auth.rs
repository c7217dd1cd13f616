//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Settings for the `[auth]` section.
///
/// Access and refresh tokens are signed with two distinct HMAC secrets so
/// that compromise of one does not compromise the other. The secrets have
/// no defaults on purpose: they must be provided per environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access-token signing (HMAC-SHA256).
    #[serde(default)]
    pub access_secret: String,
    /// Secret key for refresh-token signing. Must differ from `access_secret`.
    #[serde(default)]
    pub refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "defaults::access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "defaults::refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl AuthConfig {
    /// Validates the signing secrets at process start.
    ///
    /// A missing secret or a shared access/refresh secret is a
    /// configuration fault, not a client error.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.access_secret is not configured",
            ));
        }
        if self.refresh_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.refresh_secret is not configured",
            ));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "auth.access_secret and auth.refresh_secret must differ",
            ));
        }
        Ok(())
    }
}

mod defaults {
    pub fn access_ttl() -> u64 {
        15
    }

    pub fn refresh_ttl() -> u64 {
        7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access: &str, refresh: &str) -> AuthConfig {
        AuthConfig {
            access_secret: access.to_string(),
            refresh_secret: refresh.to_string(),
            access_ttl_minutes: defaults::access_ttl(),
            refresh_ttl_days: defaults::refresh_ttl(),
        }
    }

    #[test]
    fn test_validate_accepts_distinct_secrets() {
        assert!(config("access-secret", "refresh-secret").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_secret() {
        assert!(config("", "refresh-secret").validate().is_err());
        assert!(config("access-secret", "").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_shared_secret() {
        assert!(config("same", "same").validate().is_err());
    }
}
