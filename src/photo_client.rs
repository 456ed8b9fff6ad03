//! Unsplash API client.
//!
//! Strict methods return `Result<_, PhotoError>` so callers can tell "no
//! results" apart from "service unavailable". The `*_or_empty` variants keep
//! the best-effort contract: they log the failure and hand back an empty
//! result, and no error crosses the call.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::PhotoError;
use crate::models::{Page, PhotoRecord, SearchResponse, WallpaperItem};
use crate::startup::AppConfig;
use crate::traits::{Headers, HttpClient};

/// Longest slice of an error body kept in `PhotoError::Status`.
const MAX_ERROR_BODY: usize = 200;

/// Client for the three read-only photo endpoints.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct PhotoClient {
    /// Base URL, without trailing slash
    pub base_url: String,
    access_key: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PhotoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PhotoClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
            http,
        }
    }

    /// Build from validated configuration.
    pub fn from_config(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(
            http,
            config.api_base_url.clone(),
            config.access_key.clone().unwrap_or_default(),
        )
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Client-ID {}", self.access_key),
        );
        headers.insert("Accept-Version".to_string(), "v1".to_string());
        headers
    }

    /// GET `path` and decode the body. `Ok(None)` on 404.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, PhotoError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url, &self.headers()).await?;

        if response.status == 404 {
            return Ok(None);
        }
        if !response.is_success() {
            let mut message = response.text_lossy();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| message.is_char_boundary(*i))
                    .unwrap_or(0);
                message.truncate(cut);
            }
            return Err(PhotoError::Status {
                status: response.status,
                message: message.trim().to_string(),
            });
        }

        Ok(Some(response.json()?))
    }

    async fn get_required<T: DeserializeOwned>(&self, path: &str) -> Result<T, PhotoError> {
        self.get_json(path).await?.ok_or_else(|| PhotoError::Status {
            status: 404,
            message: format!("{} not found", path),
        })
    }

    /// `GET /photos/random?count=N`
    pub async fn random(&self, count: u32) -> Result<Vec<WallpaperItem>, PhotoError> {
        let photos: Vec<PhotoRecord> = self
            .get_required(&format!("/photos/random?count={}", count))
            .await?;
        Ok(photos.iter().map(WallpaperItem::from_photo).collect())
    }

    /// `GET /search/photos?query=Q&page=P&per_page=K`
    pub async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<Page, PhotoError> {
        let path = format!(
            "/search/photos?query={}&page={}&per_page={}",
            urlencoding::encode(query),
            page,
            per_page
        );
        let response: SearchResponse = self.get_required(&path).await?;
        let items = response
            .results
            .iter()
            .map(WallpaperItem::from_photo)
            .collect();
        Ok(Page::new(items, Some(response.total)))
    }

    /// Search using the category label as query, stamping the label on
    /// every result.
    pub async fn by_category(
        &self,
        category: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page, PhotoError> {
        let mut result = self.search(category, page, per_page).await?;
        result.items = result
            .items
            .into_iter()
            .map(|item| item.with_category(category))
            .collect();
        Ok(result)
    }

    /// `GET /photos/{id}`. `Ok(None)` when the API says 404.
    pub async fn by_id(&self, id: &str) -> Result<Option<WallpaperItem>, PhotoError> {
        let photo: Option<PhotoRecord> = self
            .get_json(&format!("/photos/{}", urlencoding::encode(id)))
            .await?;
        Ok(photo.as_ref().map(WallpaperItem::from_photo))
    }

    pub async fn random_or_empty(&self, count: u32) -> Vec<WallpaperItem> {
        self.random(count).await.unwrap_or_else(|e| {
            tracing::warn!("Error fetching random photos: {}", e);
            Vec::new()
        })
    }

    pub async fn search_or_empty(&self, query: &str, page: u32, per_page: u32) -> Page {
        self.search(query, page, per_page).await.unwrap_or_else(|e| {
            tracing::warn!("Error searching photos for {:?}: {}", query, e);
            Page::empty()
        })
    }

    pub async fn by_category_or_empty(
        &self,
        category: &str,
        page: u32,
        per_page: u32,
    ) -> Vec<WallpaperItem> {
        match self.by_category(category, page, per_page).await {
            Ok(page) => page.items,
            Err(e) => {
                tracing::warn!("Error fetching photos for category {}: {}", category, e);
                Vec::new()
            }
        }
    }

    pub async fn by_id_or_none(&self, id: &str) -> Option<WallpaperItem> {
        self.by_id(id).await.unwrap_or_else(|e| {
            tracing::warn!("Error fetching photo with ID {}: {}", id, e);
            None
        })
    }
}
