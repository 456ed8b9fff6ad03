//! The local item shape and its mapping from API records.

use serde::{Deserialize, Serialize};

use super::photo::PhotoRecord;

/// Title used when a photo has neither alt text nor a description.
pub const UNTITLED_TITLE: &str = "Untitled Wallpaper";

/// A wallpaper shown in a grid.
///
/// The favorite flag lives here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperItem {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub is_favorite: bool,
    pub category: Option<String>,
    pub author: Option<String>,
    pub download_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl WallpaperItem {
    /// Map an API record to an item. Never fails.
    ///
    /// Title order: alt text, then description, then [`UNTITLED_TITLE`].
    pub fn from_photo(photo: &PhotoRecord) -> Self {
        let title = non_blank(&photo.alt_description)
            .or_else(|| non_blank(&photo.description))
            .unwrap_or(UNTITLED_TITLE)
            .to_string();

        let urls = &photo.urls;
        let image_url = [&urls.regular, &urls.small, &urls.full, &urls.raw, &urls.thumb]
            .into_iter()
            .find_map(|url| non_blank(url))
            .unwrap_or_default()
            .to_string();

        Self {
            id: photo.id.clone(),
            image_url,
            title,
            is_favorite: false,
            category: None,
            author: photo
                .user
                .as_ref()
                .and_then(|user| non_blank(&user.name))
                .map(str::to_string),
            download_url: non_blank(&urls.full).map(str::to_string),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl From<&PhotoRecord> for WallpaperItem {
    fn from(photo: &PhotoRecord) -> Self {
        WallpaperItem::from_photo(photo)
    }
}

/// One fetched batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<WallpaperItem>,
    /// Total match count for searches; `None` for random batches.
    pub total: Option<u64>,
}

impl Page {
    pub fn new(items: Vec<WallpaperItem>, total: Option<u64>) -> Self {
        Self { items, total }
    }

    /// Zero items, total 0. What the best-effort search returns on failure.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Some(0),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhotoUrls, PhotoUser};

    fn record(alt: Option<&str>, description: Option<&str>) -> PhotoRecord {
        PhotoRecord {
            id: "abc".to_string(),
            urls: PhotoUrls {
                regular: Some("https://img/regular".to_string()),
                full: Some("https://img/full".to_string()),
                ..Default::default()
            },
            alt_description: alt.map(str::to_string),
            description: description.map(str::to_string),
            user: Some(PhotoUser {
                name: Some("Ansel".to_string()),
            }),
        }
    }

    #[test]
    fn test_title_prefers_alt_text() {
        let item = WallpaperItem::from_photo(&record(Some("blue sky"), Some("desc")));
        assert_eq!(item.title, "blue sky");
    }

    #[test]
    fn test_title_falls_back_to_description() {
        let item = WallpaperItem::from_photo(&record(None, Some("desc")));
        assert_eq!(item.title, "desc");

        let item = WallpaperItem::from_photo(&record(Some("   "), Some("desc")));
        assert_eq!(item.title, "desc");
    }

    #[test]
    fn test_title_placeholder() {
        let item = WallpaperItem::from_photo(&record(None, Some("")));
        assert_eq!(item.title, UNTITLED_TITLE);
    }

    #[test]
    fn test_mapping_fields() {
        let item = WallpaperItem::from_photo(&record(Some("a"), None));
        assert_eq!(item.id, "abc");
        assert_eq!(item.image_url, "https://img/regular");
        assert_eq!(item.download_url.as_deref(), Some("https://img/full"));
        assert_eq!(item.author.as_deref(), Some("Ansel"));
        assert!(!item.is_favorite);
        assert!(item.category.is_none());
    }

    #[test]
    fn test_image_url_falls_back_through_variants() {
        let mut photo = record(None, None);
        photo.urls = PhotoUrls {
            thumb: Some("https://img/thumb".to_string()),
            ..Default::default()
        };
        let item = WallpaperItem::from_photo(&photo);
        assert_eq!(item.image_url, "https://img/thumb");
        assert!(item.download_url.is_none());
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let photo = record(Some("x"), None);
        assert_eq!(WallpaperItem::from_photo(&photo), WallpaperItem::from_photo(&photo));
    }
}
