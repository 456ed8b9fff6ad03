//! Error category classification.
//!
//! Categories drive the retry affordance in the UI and the wording of the
//! status line when a fetch fails.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS failure, timeout. Transient.
    Network,

    /// The photo API answered with a 5xx or a rate limit. Transient.
    Server,

    /// The API answered with something we could not decode, or a 4xx that
    /// points at a bug in how we built the request.
    Client,

    /// The user has to change something (empty prompt, nothing found).
    User,

    /// Missing access key or malformed settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press r to retry",
            ErrorCategory::Server => "The photo service is busy. Press r to retry in a moment",
            ErrorCategory::Client => "Unexpected response from the photo service",
            ErrorCategory::User => "Adjust your input and try again",
            ErrorCategory::Configuration => {
                "Set UNSPLASH_ACCESS_KEY to your Unsplash access key"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(format!("{}", ErrorCategory::Configuration), "configuration");
    }

    #[test]
    fn test_recovery_hint_mentions_retry_for_transient() {
        assert!(ErrorCategory::Network.recovery_hint().contains("retry"));
        assert!(ErrorCategory::Server.recovery_hint().contains("retry"));
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .contains("UNSPLASH_ACCESS_KEY"));
    }
}
