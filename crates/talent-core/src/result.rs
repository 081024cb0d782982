//! Convenience result type alias for the Talent client.

use crate::error::AppError;

/// A specialized `Result` type for Talent client operations.
pub type AppResult<T> = Result<T, AppError>;
