//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Entries of the bottom navigation bar
//! - [`GeneratorModal`] - Generator overlay state

use crate::generator::{Prompt, SUGGESTED_KEYWORDS};
use crate::models::WallpaperItem;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Categories,
    /// Feed for the category picked on the Categories screen
    Category,
    Favorites,
    /// Feed for a typed search query
    Search,
}

impl Screen {
    /// The nav bar entry highlighted while this screen is shown.
    pub fn tab(self) -> Tab {
        match self {
            Screen::Home | Screen::Search => Tab::Home,
            Screen::Categories | Screen::Category => Tab::Categories,
            Screen::Favorites => Tab::Favorites,
        }
    }
}

/// Bottom navigation bar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Categories,
    Generate,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Categories, Tab::Generate, Tab::Favorites];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Categories => "Categories",
            Tab::Generate => "Generate",
            Tab::Favorites => "Favorites",
        }
    }
}

/// Progress of the generator overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeneratorState {
    #[default]
    Editing,
    /// Waiting for the search behind generation request `seq`
    Generating { seq: u64 },
    Done(WallpaperItem),
    /// Back to editing, with the reason shown
    Failed(String),
}

/// The generator overlay.
#[derive(Debug, Clone, Default)]
pub struct GeneratorModal {
    pub prompt: Prompt,
    /// Highlighted entry of `SUGGESTED_KEYWORDS`
    pub keyword_index: usize,
    pub state: GeneratorState,
}

impl GeneratorModal {
    pub fn highlighted_keyword(&self) -> &'static str {
        SUGGESTED_KEYWORDS[self.keyword_index % SUGGESTED_KEYWORDS.len()]
    }

    pub fn next_keyword(&mut self) {
        self.keyword_index = (self.keyword_index + 1) % SUGGESTED_KEYWORDS.len();
    }

    pub fn prev_keyword(&mut self) {
        self.keyword_index =
            (self.keyword_index + SUGGESTED_KEYWORDS.len() - 1) % SUGGESTED_KEYWORDS.len();
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.state, GeneratorState::Editing | GeneratorState::Failed(_))
    }

    /// Start over after a result was shown.
    pub fn reset(&mut self) {
        self.prompt.clear();
        self.state = GeneratorState::Editing;
    }
}
