//! Errors from the photo API client.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Why a photo request did not produce data.
///
/// "No results" for a search is not an error: it is an `Ok` page with no
/// items. `NoResults` is only raised by the generator, which needs a hit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),

    /// The API answered with a non-2xx status.
    #[error("photo API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected JSON shape.
    #[error("could not decode photo API response: {0}")]
    Decode(String),

    /// The generator was asked to run with a blank prompt.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The generator's search found nothing for the prompt.
    #[error("no photos matched \"{0}\"")]
    NoResults(String),
}

impl PhotoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PhotoError::Transport(_) => ErrorCategory::Network,
            PhotoError::Status { status, message } => match *status {
                401 => ErrorCategory::Configuration,
                403 if message.to_ascii_lowercase().contains("rate limit") => {
                    ErrorCategory::Server
                }
                403 => ErrorCategory::Configuration,
                429 | 500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            PhotoError::Decode(_) => ErrorCategory::Client,
            PhotoError::EmptyPrompt | PhotoError::NoResults(_) => ErrorCategory::User,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Short text for the status line.
    pub fn user_message(&self) -> String {
        match self {
            PhotoError::Transport(HttpError::Timeout(_)) => {
                "The photo service took too long to answer.".to_string()
            }
            PhotoError::Transport(_) => "Could not reach the photo service.".to_string(),
            PhotoError::Status { status: 401, .. } => {
                "The Unsplash access key was rejected.".to_string()
            }
            PhotoError::Status { status, .. } if self.category() == ErrorCategory::Server => {
                format!("The photo service is unavailable (HTTP {}).", status)
            }
            PhotoError::Status { status, .. } => {
                format!("The photo service refused the request (HTTP {}).", status)
            }
            PhotoError::Decode(_) => "The photo service sent an unexpected response.".to_string(),
            PhotoError::EmptyPrompt => "Describe your wallpaper first.".to_string(),
            PhotoError::NoResults(prompt) => format!("Nothing found for \"{}\".", prompt),
        }
    }
}

impl From<serde_json::Error> for PhotoError {
    fn from(e: serde_json::Error) -> Self {
        PhotoError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: &str) -> PhotoError {
        PhotoError::Status {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_transport_is_retryable_network() {
        let err = PhotoError::from(HttpError::ConnectionFailed("refused".into()));
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(status(401, "").category(), ErrorCategory::Configuration);
        assert_eq!(status(403, "Forbidden").category(), ErrorCategory::Configuration);
        assert_eq!(status(403, "Rate Limit Exceeded").category(), ErrorCategory::Server);
        assert_eq!(status(429, "").category(), ErrorCategory::Server);
        assert_eq!(status(503, "").category(), ErrorCategory::Server);
        assert_eq!(status(400, "").category(), ErrorCategory::Client);
    }

    #[test]
    fn test_user_messages() {
        assert!(status(503, "").user_message().contains("503"));
        assert!(status(401, "").user_message().contains("access key"));
        assert_eq!(
            PhotoError::NoResults("neon".into()).user_message(),
            "Nothing found for \"neon\"."
        );
    }

    #[test]
    fn test_decode_from_serde() {
        let err: PhotoError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, PhotoError::Decode(_)));
        assert!(!err.is_retryable());
    }
}
