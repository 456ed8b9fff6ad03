//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no Unsplash access key configured (set UNSPLASH_ACCESS_KEY)")]
    MissingAccessKey,

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: String, value: String },

    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}
