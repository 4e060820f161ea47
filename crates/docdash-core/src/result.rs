//! Convenience result type alias for DocDash.

use crate::error::AppError;

/// A specialized `Result` type for DocDash operations.
pub type AppResult<T> = Result<T, AppError>;
