//! Argon2id password hashing.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};

use agriportal_core::error::AppError;

/// Hashes and verifies passwords with Argon2id and a per-hash random salt.
///
/// Comparison happens against the PHC-encoded hash, never the raw
/// password, and takes the same time whether the guess is close or not.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish()
    }
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a raw password into a PHC string.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Check a raw password against a stored PHC string.
    ///
    /// A wrong password is `Ok(false)`; `Err` means the stored hash is
    /// unreadable or verification itself broke.
    pub fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("secret12").unwrap();

        assert_ne!(hash, "secret12");
        assert!(hasher.verify_password("secret12", &hash).unwrap());
        assert!(!hasher.verify_password("wrong-pass", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash_password("secret12").unwrap();
        let second = hasher.hash_password("secret12").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify_password("secret12", "not-a-phc-string").is_err());
    }
}
