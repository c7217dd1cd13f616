//! Unified application error type.
//!
//! Every fallible operation in the workspace surfaces an [`AppError`]: a
//! category ([`ErrorKind`], which decides the HTTP status at the API
//! boundary), a human-readable message, an optional machine-readable wire
//! code such as `TOKEN_EXPIRED`, and an optional underlying cause. The
//! wire codes are part of the HTTP contract, so they travel with the
//! error value instead of being inferred downstream from error text.

use std::fmt;
use thiserror::Error;

/// Error categories recognized at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// The caller could not be authenticated.
    Authentication,
    /// The caller is authenticated but not allowed to do this.
    Authorization,
    /// The request input is missing or malformed.
    Validation,
    /// An unexpected internal failure.
    Internal,
    /// The database rejected or failed an operation.
    Database,
    /// The process configuration is unusable.
    Configuration,
    /// A value failed to serialize or deserialize.
    Serialization,
}

impl ErrorKind {
    /// Stable uppercase name for logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The application-wide error value.
///
/// Constructed through the per-kind helpers (`AppError::validation(...)`)
/// or [`AppError::with_source`] when wrapping a lower-level error, then
/// optionally tagged with a wire code via [`AppError::with_code`].
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Machine-readable wire code (e.g. `TOKEN_REVOKED`). Falls back to a
    /// per-kind default at the API boundary when absent.
    pub code: Option<&'static str>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    /// Attach an explicit wire code to this error.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Shorthand for an [`ErrorKind::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Shorthand for an [`ErrorKind::Authentication`] error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Shorthand for an [`ErrorKind::Authorization`] error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Shorthand for an [`ErrorKind::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Shorthand for an [`ErrorKind::Internal`] error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Shorthand for an [`ErrorKind::Database`] error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Shorthand for an [`ErrorKind::Configuration`] error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

// The boxed source is not clonable; a clone keeps the kind, message, and
// code but drops the cause.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            code: self.code,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_code_overrides_default() {
        let err = AppError::authentication("Token is no longer valid").with_code("TOKEN_REVOKED");
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.code, Some("TOKEN_REVOKED"));
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::validation("Email and password are required");
        assert_eq!(
            err.to_string(),
            "VALIDATION: Email and password are required"
        );
    }

    #[test]
    fn test_clone_drops_source() {
        let err = AppError::with_source(ErrorKind::Database, "write failed", std::fmt::Error);
        let cloned = err.clone();
        assert!(err.source.is_some());
        assert!(cloned.source.is_none());
        assert_eq!(cloned.message, "write failed");
    }
}
