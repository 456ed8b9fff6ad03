//! Navigation methods for the App.

use crate::feed::FeedSource;
use crate::models::CATEGORIES;
use crate::state::WallpaperList;

use super::{App, GeneratorModal, Screen, Tab};

impl App {
    /// Switch to the screen behind a nav bar entry.
    pub fn switch_tab(&mut self, tab: Tab) {
        match tab {
            Tab::Home => self.show(Screen::Home),
            Tab::Categories => self.show(Screen::Categories),
            Tab::Favorites => {
                self.favorites_index = 0;
                self.show(Screen::Favorites);
            }
            Tab::Generate => self.open_generator(),
        }
    }

    /// Change screen, disposing the feed if we are leaving it.
    fn show(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        if matches!(self.screen, Screen::Category | Screen::Search) {
            if let Some(feed) = self.feed.as_mut() {
                tracing::debug!("Disposing feed {}", feed.source());
                feed.dispose();
            }
        }
        self.status_message = None;
        self.screen = screen;
    }

    /// Open the feed of the highlighted category.
    pub fn open_selected_category(&mut self) {
        let Some(category) = CATEGORIES.get(self.category_index) else {
            return;
        };
        self.open_feed(FeedSource::Category(category.name.to_string()), Screen::Category);
    }

    /// Run `query` as a search feed. Blank queries are ignored.
    pub fn open_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.open_feed(FeedSource::Search(query.to_string()), Screen::Search);
    }

    fn open_feed(&mut self, source: FeedSource, screen: Screen) {
        // Leave first so a feed we are already on gets disposed.
        self.show(Screen::Home);
        let mut list = WallpaperList::new(source, self.per_page);
        let ticket = list.begin_refresh();
        let source = list.source().clone();
        self.feed = Some(list);
        self.dispatch(&source, self.per_page, ticket);
        self.show(screen);
    }

    /// Step back one level.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Category => self.show(Screen::Categories),
            Screen::Search | Screen::Categories | Screen::Favorites => self.show(Screen::Home),
            Screen::Home => {}
        }
    }

    pub fn open_generator(&mut self) {
        if self.generator.is_none() {
            self.generator = Some(GeneratorModal::default());
        }
    }

    pub fn close_generator(&mut self) {
        self.generator = None;
    }

    /// Move the cursor down. Reaching the last row asks for another page.
    pub fn move_down(&mut self) {
        match self.screen {
            Screen::Categories => {
                if self.category_index + 1 < CATEGORIES.len() {
                    self.category_index += 1;
                }
            }
            Screen::Favorites => {
                let count = self.favorites.len();
                if self.favorites_index + 1 < count {
                    self.favorites_index += 1;
                }
            }
            Screen::Home | Screen::Category | Screen::Search => {
                let at_end = match self.current_list_mut() {
                    Some(list) => {
                        list.select_next();
                        list.at_end()
                    }
                    None => false,
                };
                if at_end {
                    self.load_more();
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.screen {
            Screen::Categories => self.category_index = self.category_index.saturating_sub(1),
            Screen::Favorites => self.favorites_index = self.favorites_index.saturating_sub(1),
            Screen::Home | Screen::Category | Screen::Search => {
                if let Some(list) = self.current_list_mut() {
                    list.select_prev();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::photo_client::PhotoClient;
    use crate::startup::AppConfig;
    use std::sync::Arc;

    fn app() -> App {
        let client = PhotoClient::new(Arc::new(MockHttpClient::new()), "https://api.test", "k");
        App::new(client, &AppConfig::default().with_access_key("k"))
    }

    #[tokio::test]
    async fn test_open_category_then_back_disposes_feed() {
        let mut app = app();
        app.switch_tab(Tab::Categories);
        app.category_index = 5;
        app.open_selected_category();

        assert_eq!(app.screen, Screen::Category);
        let feed = app.feed.as_ref().unwrap();
        assert_eq!(feed.source(), &FeedSource::Category("Neon".into()));
        assert!(feed.is_loading());

        app.back();
        assert_eq!(app.screen, Screen::Categories);
        assert!(app.feed.as_ref().unwrap().is_disposed());
    }

    #[tokio::test]
    async fn test_blank_search_is_ignored() {
        let mut app = app();
        app.open_search("   ");
        assert_eq!(app.screen, Screen::Home);
        assert!(app.feed.is_none());

        app.open_search("neon");
        assert_eq!(app.screen, Screen::Search);
        app.back();
        assert_eq!(app.screen, Screen::Home);
    }

    #[tokio::test]
    async fn test_new_feed_replaces_old() {
        let mut app = app();
        app.open_search("first");
        let first = app.feed.as_ref().unwrap().instance();
        app.open_search("second");

        let feed = app.feed.as_ref().unwrap();
        assert_ne!(feed.instance(), first);
        assert!(!feed.is_disposed());
    }

    #[test]
    fn test_category_cursor_is_clamped() {
        let mut app = app();
        app.switch_tab(Tab::Categories);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.category_index, CATEGORIES.len() - 1);
        for _ in 0..20 {
            app.move_up();
        }
        assert_eq!(app.category_index, 0);
    }

    #[test]
    fn test_generate_tab_opens_modal_without_leaving_screen() {
        let mut app = app();
        app.switch_tab(Tab::Favorites);
        app.switch_tab(Tab::Generate);
        assert_eq!(app.screen, Screen::Favorites);
        assert!(app.generator.is_some());
        app.close_generator();
        assert!(app.generator.is_none());
    }
}
