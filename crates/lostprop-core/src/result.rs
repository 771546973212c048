//! Convenience result alias.

use crate::error::AppError;

/// Result type used across all portal crates.
pub type AppResult<T> = Result<T, AppError>;
