//! # AppError
//!
//! Centralized error handling for the LiteLens core.
//! There are no fatal conditions here: every mutation entry point is total
//! over its input domain once malformed input is rejected by validation.

use thiserror::Error;

/// The primary error type for all ll-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Post, User). Callers recover by falling
    /// back to the default overlay or skipping the derived notification.
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty or oversized comment body).
    /// The attempted operation is a no-op: no broadcast, no log entry.
    #[error("validation error: {0}")]
    Validation(String),
}

/// A specialized Result type for LiteLens core logic.
pub type Result<T> = std::result::Result<T, AppError>;
