//! Common test utilities for integration tests.
//!
//! Fixtures for photo JSON, app construction and draining the app's
//! message channel.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use wallx::app::{App, AppMessage};
use wallx::photo_client::PhotoClient;
use wallx::startup::AppConfig;

pub const TEST_BASE_URL: &str = "https://api.test";
pub const TEST_ACCESS_KEY: &str = "test-access-key";

/// One photo record as the API returns it.
pub fn photo_json(id: &str, alt: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "urls": {
            "raw": format!("https://images.unsplash.com/{}?raw", id),
            "full": format!("https://images.unsplash.com/{}?full", id),
            "regular": format!("https://images.unsplash.com/{}?regular", id),
            "small": format!("https://images.unsplash.com/{}?small", id),
            "thumb": format!("https://images.unsplash.com/{}?thumb", id)
        },
        "alt_description": alt,
        "description": null,
        "user": { "name": "Test Photographer" },
        "likes": 12
    })
}

/// A JSON array of photos with ids `prefix-0..n`.
pub fn photo_array(prefix: &str, n: usize) -> String {
    let photos: Vec<_> = (0..n)
        .map(|i| photo_json(&format!("{}-{}", prefix, i), Some("a wallpaper")))
        .collect();
    serde_json::Value::Array(photos).to_string()
}

/// A search response body.
pub fn search_body(prefix: &str, n: usize, total: u64) -> String {
    let results: Vec<_> = (0..n)
        .map(|i| photo_json(&format!("{}-{}", prefix, i), Some("a search hit")))
        .collect();
    serde_json::json!({ "total": total, "total_pages": 1, "results": results }).to_string()
}

pub fn test_config() -> AppConfig {
    AppConfig::default()
        .with_access_key(TEST_ACCESS_KEY)
        .with_api_base_url(TEST_BASE_URL)
        .with_per_page(2)
        .with_random_count(3)
}

/// App wired to `mock`, with its message receiver taken out.
pub fn test_app(mock: &MockHttpClient) -> (App, tokio::sync::mpsc::UnboundedReceiver<AppMessage>) {
    let client = PhotoClient::new(Arc::new(mock.clone()), TEST_BASE_URL, TEST_ACCESS_KEY);
    let mut app = App::new(client, &test_config());
    let rx = app.message_rx.take().expect("fresh app has a receiver");
    (app, rx)
}

/// Wait for the next message and hand it to the app.
pub async fn pump_one(app: &mut App, rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppMessage>) {
    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("message within 5s")
        .expect("channel open");
    app.handle_message(msg);
}
