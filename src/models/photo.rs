//! Wire shapes of the Unsplash API.
//!
//! Only the fields the app consumes are declared; everything else in the
//! payload is ignored. Every field is optional on decode because the API
//! sends `null` for missing descriptions and a partial record must still map
//! to an item.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUser {
    #[serde(default)]
    pub name: Option<String>,
}

/// One photo as returned by `/photos/random`, `/photos/{id}` and inside
/// `/search/photos` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    #[serde(default)]
    pub urls: PhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user: Option<PhotoUser>,
}

/// Body of `GET /search/photos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub results: Vec<PhotoRecord>,
}
