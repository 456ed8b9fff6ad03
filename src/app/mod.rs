//! Application state and logic for the TUI.
//!
//! - [`App`] - Screens, lists and the message channel
//! - [`Screen`] / [`Tab`] - Navigation
//! - [`AppMessage`] - Results of background fetches

mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{GeneratorModal, GeneratorState, Screen, Tab};

use tokio::sync::mpsc;

use crate::feed::{load_page, FeedSource};
use crate::generator::generate;
use crate::models::WallpaperItem;
use crate::photo_client::PhotoClient;
use crate::startup::AppConfig;
use crate::state::{Favorites, FetchTicket, LoadStatus, WallpaperList};

/// Main application state
pub struct App {
    pub screen: Screen,
    /// Random feed shown on Home
    pub home: WallpaperList,
    /// Category or search feed. Kept (disposed) after leaving its screen so
    /// late responses are recognised and dropped.
    pub feed: Option<WallpaperList>,
    /// Favorites picked on any feed this session
    pub favorites: Favorites,
    /// Selected row on the Categories screen
    pub category_index: usize,
    /// Selected row on the Favorites screen
    pub favorites_index: usize,
    /// Generator overlay, when open
    pub generator: Option<GeneratorModal>,
    /// Search query being typed, when the search bar is open
    pub search_input: Option<String>,
    /// One-line feedback shown above the nav bar
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    client: PhotoClient,
    per_page: u32,
    generation_seq: u64,
}

impl App {
    pub fn new(client: PhotoClient, config: &AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Home,
            home: WallpaperList::new(FeedSource::Random, config.random_count),
            feed: None,
            favorites: Favorites::new(),
            category_index: 0,
            favorites_index: 0,
            generator: None,
            search_input: None,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
            per_page: config.per_page,
            generation_seq: 0,
        }
    }

    /// Kick off the first Home fetch. Needs a tokio runtime.
    pub fn start(&mut self) {
        let ticket = self.home.begin_refresh();
        self.dispatch(&FeedSource::Random, self.home.per_page(), ticket);
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Anything spinning right now.
    pub fn is_busy(&self) -> bool {
        self.current_list().is_some_and(WallpaperList::is_loading)
            || matches!(
                self.generator.as_ref().map(|g| &g.state),
                Some(GeneratorState::Generating { .. })
            )
    }

    /// The fetched list shown on the current screen. Favorites and
    /// Categories have none.
    pub fn current_list(&self) -> Option<&WallpaperList> {
        match self.screen {
            Screen::Home => Some(&self.home),
            Screen::Category | Screen::Search => self.feed.as_ref(),
            Screen::Categories | Screen::Favorites => None,
        }
    }

    pub fn current_list_mut(&mut self) -> Option<&mut WallpaperList> {
        match self.screen {
            Screen::Home => Some(&mut self.home),
            Screen::Category | Screen::Search => self.feed.as_mut(),
            Screen::Categories | Screen::Favorites => None,
        }
    }

    /// Session favorites, oldest first.
    pub fn favorite_items(&self) -> Vec<&WallpaperItem> {
        self.favorites.items().iter().collect()
    }

    /// Push the session favorites onto every live list's item flags.
    fn sync_favorite_flags(&mut self) {
        self.home.sync_favorites(&self.favorites);
        if let Some(feed) = self.feed.as_mut() {
            feed.sync_favorites(&self.favorites);
        }
    }

    /// The item the cursor is on, on any list screen.
    pub fn selected_item(&self) -> Option<&WallpaperItem> {
        match self.screen {
            Screen::Favorites => self.favorites.get(self.favorites_index),
            Screen::Categories => None,
            _ => self.current_list().and_then(WallpaperList::selected_item),
        }
    }

    /// Error text for the status line, if the current list failed.
    pub fn current_error(&self) -> Option<String> {
        match self.current_list()?.status() {
            LoadStatus::Error { error, .. } => Some(format!(
                "{} {}",
                error.user_message(),
                error.category().recovery_hint()
            )),
            _ => None,
        }
    }

    /// Run the fetch for `ticket` in the background.
    fn dispatch(&self, source: &FeedSource, per_page: u32, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let source = source.clone();
        tokio::spawn(async move {
            let result = load_page(&client, &source, ticket.page, per_page).await;
            let _ = tx.send(AppMessage::PageLoaded { ticket, result });
        });
    }

    fn dispatch_generation(&mut self, prompt: String) -> u64 {
        self.generation_seq += 1;
        let seq = self.generation_seq;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = generate(&client, &prompt).await;
            let _ = tx.send(AppMessage::Generated { seq, result });
        });
        seq
    }

    /// Refresh the current list (pull-to-refresh).
    pub fn refresh(&mut self) {
        let Some(list) = self.current_list_mut() else {
            return;
        };
        let ticket = list.begin_refresh();
        let (source, per_page) = (list.source().clone(), list.per_page());
        self.dispatch(&source, per_page, ticket);
    }

    /// Append the next page of the current list.
    pub fn load_more(&mut self) {
        let Some(list) = self.current_list_mut() else {
            return;
        };
        let ticket = list.begin_load_more();
        let (source, per_page) = (list.source().clone(), list.per_page());
        self.dispatch(&source, per_page, ticket);
    }

    /// Re-run the failed intent, or refresh when nothing failed.
    pub fn retry_or_refresh(&mut self) {
        let Some(list) = self.current_list_mut() else {
            return;
        };
        let ticket = list.retry().or_else(|| list.begin_refresh());
        let (source, per_page) = (list.source().clone(), list.per_page());
        self.dispatch(&source, per_page, ticket);
    }

    /// Toggle the selected item in the session favorites.
    pub fn toggle_selected_favorite(&mut self) -> Option<bool> {
        let item = self.selected_item()?.clone();
        let flag = self.favorites.toggle(&item);
        if self.screen == Screen::Favorites {
            self.favorites_index = self
                .favorites_index
                .min(self.favorites.len().saturating_sub(1));
        }
        self.sync_favorite_flags();
        tracing::debug!("Favorite {} -> {}", item.id, flag);
        Some(flag)
    }

    /// Open the download URL of the selected item in the browser.
    pub fn open_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let url = item
            .download_url
            .clone()
            .unwrap_or_else(|| item.image_url.clone());
        self.status_message = Some(match open::that(&url) {
            Ok(()) => format!("Opened {}", url),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", url, e);
                format!("Could not open browser: {}", e)
            }
        });
    }
}
