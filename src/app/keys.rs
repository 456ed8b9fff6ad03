//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, GeneratorState, Screen, Tab};

impl App {
    /// Route a key press to the generator, the search bar, or the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if self.generator.is_some() {
            self.handle_generator_key(key);
        } else if self.search_input.is_some() {
            self.handle_search_key(key);
        } else {
            self.handle_screen_key(key);
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') => self.switch_tab(Tab::Home),
            KeyCode::Char('2') => self.switch_tab(Tab::Categories),
            KeyCode::Char('3') | KeyCode::Char('g') => self.switch_tab(Tab::Generate),
            KeyCode::Char('4') => self.switch_tab(Tab::Favorites),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Enter => {
                if self.screen == Screen::Categories {
                    self.open_selected_category();
                }
            }
            KeyCode::Char('f') => {
                if let Some(flag) = self.toggle_selected_favorite() {
                    self.status_message = Some(
                        if flag {
                            "Added to favorites"
                        } else {
                            "Removed from favorites"
                        }
                        .to_string(),
                    );
                }
            }
            KeyCode::Char('r') => self.retry_or_refresh(),
            KeyCode::Char('n') => self.load_more(),
            KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('/') => self.search_input = Some(String::new()),
            KeyCode::Esc => self.back(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(input) = self.search_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.search_input = None,
            KeyCode::Enter => {
                let query = std::mem::take(input);
                self.search_input = None;
                self.open_search(&query);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
    }

    fn handle_generator_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.generator.as_mut() else {
            return;
        };
        if key.code == KeyCode::Esc {
            self.close_generator();
            return;
        }

        match modal.state {
            GeneratorState::Generating { .. } => {}
            GeneratorState::Done(_) => match key.code {
                KeyCode::Char('r') => modal.reset(),
                KeyCode::Enter => {
                    self.close_generator();
                    self.switch_tab(Tab::Home);
                }
                _ => {}
            },
            GeneratorState::Editing | GeneratorState::Failed(_) => match key.code {
                KeyCode::Tab => modal.next_keyword(),
                KeyCode::BackTab => modal.prev_keyword(),
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let keyword = modal.highlighted_keyword();
                    modal.prompt.add_keyword(keyword);
                }
                KeyCode::Enter => self.submit_generation(),
                KeyCode::Backspace => modal.prompt.backspace(),
                KeyCode::Char(c) => {
                    modal.prompt.push(c);
                    modal.state = GeneratorState::Editing;
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::models::{Page, WallpaperItem};
    use crate::photo_client::PhotoClient;
    use crate::startup::AppConfig;
    use std::sync::Arc;

    fn app() -> App {
        let client = PhotoClient::new(Arc::new(MockHttpClient::new()), "https://api.test", "k");
        App::new(client, &AppConfig::default().with_access_key("k"))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn seed_home(app: &mut App, ids: &[&str]) {
        let ticket = app.home.begin_refresh().unwrap();
        let items = ids
            .iter()
            .map(|id| WallpaperItem {
                id: id.to_string(),
                image_url: format!("https://img/{}", id),
                title: id.to_string(),
                is_favorite: false,
                category: None,
                author: None,
                download_url: None,
            })
            .collect();
        app.home.apply(&ticket, Ok(Page::new(items, None)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut in_modal = self::app();
        in_modal.open_generator();
        in_modal.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(in_modal.should_quit);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Categories);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen, Screen::Favorites);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Home);
    }

    #[tokio::test]
    async fn test_favorite_key_toggles_selected() {
        let mut app = app();
        seed_home(&mut app, &["a", "b"]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('f'));

        assert!(app.home.item("b").unwrap().is_favorite);
        assert!(!app.home.item("a").unwrap().is_favorite);
        assert_eq!(app.status_message.as_deref(), Some("Added to favorites"));

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("b"));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.favorite_items().len(), 0);
        assert!(!app.home.item("b").unwrap().is_favorite);
    }

    #[test]
    fn test_generator_keyword_and_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert!(app.generator.is_some());

        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        type_text(&mut app, " q");
        press(&mut app, KeyCode::Backspace);

        let modal = app.generator.as_ref().unwrap();
        assert_eq!(modal.prompt.as_str(), "Nature ");
        // 'q' went to the prompt, not the quit binding
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.generator.is_none());
    }

    #[test]
    fn test_search_input_escape_cancels() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "neo");
        assert_eq!(app.search_input.as_deref(), Some("neo"));
        press(&mut app, KeyCode::Esc);
        assert!(app.search_input.is_none());
        assert_eq!(app.screen, Screen::Home);
    }

    #[tokio::test]
    async fn test_search_input_submits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "neon");
        press(&mut app, KeyCode::Enter);
        assert!(app.search_input.is_none());
        assert_eq!(app.screen, Screen::Search);
    }
}
