//! Error handling for WallX.
//!
//! - [`PhotoError`]: why a photo API call produced no data
//! - [`ConfigError`]: bad or missing settings
//! - [`WallxError`] / [`WallxResult`]: the union returned by entry points
//! - [`ErrorCategory`]: retry and messaging decisions
//!
//! | Category | Typical cause | Retryable |
//! |----------|---------------|-----------|
//! | Network | connection refused, timeout | Yes |
//! | Server | 5xx, rate limited | Yes |
//! | Client | undecodable body, 4xx | No |
//! | User | empty prompt, nothing found | No |
//! | Configuration | missing/rejected access key | No |

mod category;
mod config;
mod photo;
mod wallx_error;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use photo::PhotoError;
pub use wallx_error::{WallxError, WallxResult};
