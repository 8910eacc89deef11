//! Unified error handling.
//!
//! Components keep their own error types (`FetchError`, `StorageError`,
//! `ConfigError`); the application context folds them into a single
//! `AppError` so shell-facing operations return one `Result` type.
//!
//! Two failure classes never reach here by design: validation failures
//! (bad quantities, corrupted stored collections, non-discounting promo
//! prices) are clamped or defaulted silently, and an empty filter result
//! is a rendered state, not an error.

use thiserror::Error;

use crate::catalog::FetchError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog retrieval failed; the caller renders the error panel with
    /// a manual reload, never an automatic retry.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The persistent store rejected a write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration was invalid at construction.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A referenced product is not in the session snapshot.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
