//! Unified error type for the WallX crate.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::photo::PhotoError;

/// Any error a WallX entry point can return.
#[derive(Debug, Error)]
pub enum WallxError {
    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown category {0:?} (see `wallx categories`)")]
    UnknownCategory(String),
}

impl WallxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WallxError::Photo(err) => err.category(),
            WallxError::Config(_) => ErrorCategory::Configuration,
            WallxError::Io(_) => ErrorCategory::Client,
            WallxError::UnknownCategory(_) => ErrorCategory::User,
        }
    }
}

/// Result alias used across the crate's fallible entry points.
pub type WallxResult<T> = Result<T, WallxError>;
