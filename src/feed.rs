//! Feed sources and the single fetch each one performs per page.

use std::fmt;

use crate::error::PhotoError;
use crate::models::Page;
use crate::photo_client::PhotoClient;

/// What a wallpaper list is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Random batches ("Trending Wallpapers"); every page is a fresh batch.
    Random,
    /// Keyword search.
    Search(String),
    /// Category feed; the label is the search query.
    Category(String),
}

impl FeedSource {
    pub fn title(&self) -> String {
        match self {
            FeedSource::Random => "Trending Wallpapers".to_string(),
            FeedSource::Search(query) => format!("Results for \"{}\"", query),
            FeedSource::Category(name) => name.clone(),
        }
    }

    /// Whether the API reports a total for this source.
    pub fn is_paged(&self) -> bool {
        !matches!(self, FeedSource::Random)
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Random => write!(f, "random"),
            FeedSource::Search(query) => write!(f, "search:{}", query),
            FeedSource::Category(name) => write!(f, "category:{}", name),
        }
    }
}

/// Fetch one page of `source`.
///
/// Random feeds ignore `page` and ask for `per_page` photos.
pub async fn load_page(
    client: &PhotoClient,
    source: &FeedSource,
    page: u32,
    per_page: u32,
) -> Result<Page, PhotoError> {
    match source {
        FeedSource::Random => {
            let items = client.random(per_page).await?;
            Ok(Page::new(items, None))
        }
        FeedSource::Search(query) => client.search(query, page, per_page).await,
        FeedSource::Category(name) => client.by_category(name, page, per_page).await,
    }
}
