//! Favorites kept for the whole session.
//!
//! This is the only place a favorite is recorded. Lists carry an
//! `is_favorite` flag on each item for rendering, but it is always derived
//! from here via [`WallpaperList::sync_favorites`](super::WallpaperList::sync_favorites),
//! so a favorite survives refreshes and outlives the feed it was picked in.

use crate::models::WallpaperItem;

/// Favorited wallpapers in the order they were added.
#[derive(Debug, Default)]
pub struct Favorites {
    items: Vec<WallpaperItem>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Add `item` if it is not a favorite yet, remove it otherwise.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, item: &WallpaperItem) -> bool {
        if let Some(index) = self.items.iter().position(|f| f.id == item.id) {
            self.items.remove(index);
            return false;
        }
        let mut item = item.clone();
        item.is_favorite = true;
        self.items.push(item);
        true
    }

    pub fn items(&self) -> &[WallpaperItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&WallpaperItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
