//! Closed error set for token verification.

use thiserror::Error;

/// Every way a token can fail cryptographic verification.
///
/// Callers switch on these variants directly to pick the wire code and
/// HTTP status; no error-name string matching anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature and structure are valid but the expiry is in the past.
    #[error("token has expired")]
    Expired,
    /// The token is not structurally a valid JWT.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not verify under the expected secret.
    #[error("token signature mismatch")]
    SignatureMismatch,
}
