//! Mock implementations for test fixtures.
//!
//! Re-exports the mock transport from `wallx::adapters::mock` and adds a
//! small builder for canned responses.

pub use wallx::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use wallx::traits::{Headers, HttpClient, HttpError, Response};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for URLs starting with `url`.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(url, MockResponse::json(status, json));
        self
    }

    /// Configures a transport failure for URLs starting with `url`.
    pub fn with_transport_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    /// Configures a default response for unmatched URLs.
    pub fn with_default_json(self, status: u16, json: &str) -> Self {
        self.client.set_default_response(MockResponse::json(status, json));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
