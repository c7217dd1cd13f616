//! Result alias used across the workspace.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`, the return type of nearly every
/// fallible operation in the service.
pub type AppResult<T> = Result<T, AppError>;
