//! Prompt-driven "generation".
//!
//! There is no image model behind this: the prompt is used as a search query
//! and the best match is presented as the generated wallpaper.

use crate::error::PhotoError;
use crate::models::WallpaperItem;
use crate::photo_client::PhotoClient;

pub const SUGGESTED_KEYWORDS: [&str; 10] = [
    "Abstract",
    "Nature",
    "Minimal",
    "Dark",
    "Neon",
    "Space",
    "Cyberpunk",
    "Watercolor",
    "Geometric",
    "Anime",
];

/// Category stamped on generated items.
pub const GENERATED_CATEGORY: &str = "AI Generated";

/// Characters of the prompt kept in a generated item's title.
const TITLE_CHARS: usize = 20;

/// Prompt text being edited in the generator modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a suggested keyword, comma-separated.
    pub fn add_keyword(&mut self, keyword: &str) {
        if self.text.is_empty() {
            self.text.push_str(keyword);
        } else {
            self.text.push_str(", ");
            self.text.push_str(keyword);
        }
    }
}

/// Title for a generated item: the first 20 characters of the prompt, with
/// an ellipsis when it was longer.
pub fn generated_title(prompt: &str) -> String {
    let mut title: String = prompt.chars().take(TITLE_CHARS).collect();
    if prompt.chars().count() > TITLE_CHARS {
        title.push_str("...");
    }
    title
}

/// Run `prompt` as a one-result search and dress the hit up as a generated
/// wallpaper.
pub async fn generate(client: &PhotoClient, prompt: &str) -> Result<WallpaperItem, PhotoError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(PhotoError::EmptyPrompt);
    }

    tracing::debug!("Generating wallpaper for prompt {:?}", prompt);
    let page = client.search(prompt, 1, 1).await?;
    let hit = page
        .items
        .into_iter()
        .next()
        .ok_or_else(|| PhotoError::NoResults(prompt.to_string()))?;

    Ok(WallpaperItem {
        title: generated_title(prompt),
        ..hit.with_category(GENERATED_CATEGORY)
    })
}
