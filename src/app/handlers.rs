//! Message handling for the App.

use crate::error::PhotoError;
use crate::state::ApplyOutcome;

use super::{App, AppMessage, GeneratorState};

impl App {
    /// Handle an incoming async message.
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PageLoaded { ticket, result } => {
                let list = if ticket.instance == self.home.instance() {
                    Some(&mut self.home)
                } else {
                    self.feed
                        .as_mut()
                        .filter(|feed| feed.instance() == ticket.instance)
                };
                let Some(list) = list else {
                    tracing::debug!("Dropping response for retired list {}", ticket.instance);
                    return;
                };
                let outcome = list.apply(&ticket, result);
                if matches!(outcome, ApplyOutcome::Applied { .. }) {
                    list.sync_favorites(&self.favorites);
                }
                match outcome {
                    ApplyOutcome::Applied { added } if added == 0 && list.is_empty() => {
                        self.status_message = Some("No wallpapers found.".to_string());
                    }
                    ApplyOutcome::Applied { .. } | ApplyOutcome::Failed => {
                        self.status_message = None;
                    }
                    ApplyOutcome::Stale | ApplyOutcome::Disposed => {}
                }
            }
            AppMessage::Generated { seq, result } => {
                if seq != self.generation_seq {
                    tracing::debug!("Dropping superseded generation #{}", seq);
                    return;
                }
                let modal = self
                    .generator
                    .as_mut()
                    .filter(|g| g.state == GeneratorState::Generating { seq });
                match result {
                    Ok(item) => {
                        tracing::info!("Generated wallpaper {} ({})", item.id, item.title);
                        self.home.prepend(item.clone());
                        self.home.sync_favorites(&self.favorites);
                        if let Some(modal) = modal {
                            modal.state = GeneratorState::Done(item);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Generation failed: {}", e);
                        if let Some(modal) = modal {
                            modal.state = GeneratorState::Failed(e.user_message());
                        }
                    }
                }
            }
        }
    }

    /// Start generating from the modal's prompt.
    pub fn submit_generation(&mut self) {
        let Some(modal) = self.generator.as_ref() else {
            return;
        };
        if !modal.is_editable() {
            return;
        }
        if modal.prompt.is_blank() {
            if let Some(modal) = self.generator.as_mut() {
                modal.state = GeneratorState::Failed(PhotoError::EmptyPrompt.user_message());
            }
            return;
        }
        let prompt = modal.prompt.as_str().to_string();
        let seq = self.dispatch_generation(prompt);
        if let Some(modal) = self.generator.as_mut() {
            modal.state = GeneratorState::Generating { seq };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::app::GeneratorModal;
    use crate::models::{Page, WallpaperItem};
    use crate::photo_client::PhotoClient;
    use crate::startup::AppConfig;
    use crate::state::{FetchKind, FetchTicket, LoadStatus};
    use crate::traits::HttpError;
    use std::sync::Arc;

    fn app() -> App {
        let client = PhotoClient::new(Arc::new(MockHttpClient::new()), "https://api.test", "k");
        App::new(client, &AppConfig::default().with_access_key("k"))
    }

    fn item(id: &str) -> WallpaperItem {
        WallpaperItem {
            id: id.to_string(),
            image_url: format!("https://img/{}", id),
            title: id.to_string(),
            is_favorite: false,
            category: None,
            author: None,
            download_url: None,
        }
    }

    #[test]
    fn test_page_routed_to_home() {
        let mut app = app();
        let ticket = app.home.begin_refresh().unwrap();
        app.needs_redraw = false;

        app.handle_message(AppMessage::PageLoaded {
            ticket,
            result: Ok(Page::new(vec![item("a"), item("b")], None)),
        });

        assert!(app.needs_redraw);
        assert_eq!(app.home.len(), 2);
    }

    #[test]
    fn test_unknown_instance_is_dropped() {
        let mut app = app();
        let ticket = FetchTicket {
            instance: u64::MAX,
            seq: 1,
            kind: FetchKind::Refresh,
            page: 1,
        };
        app.handle_message(AppMessage::PageLoaded {
            ticket,
            result: Ok(Page::new(vec![item("a")], None)),
        });
        assert!(app.home.is_empty());
    }

    #[test]
    fn test_failed_page_sets_error_status() {
        let mut app = app();
        let ticket = app.home.begin_refresh().unwrap();
        app.handle_message(AppMessage::PageLoaded {
            ticket,
            result: Err(PhotoError::Transport(HttpError::Timeout("slow".into()))),
        });
        assert!(matches!(app.home.status(), LoadStatus::Error { .. }));
        assert!(app.current_error().unwrap().contains("took too long"));
    }

    #[test]
    fn test_blank_prompt_fails_without_request() {
        let mut app = app();
        app.open_generator();
        app.submit_generation();
        assert_eq!(
            app.generator.as_ref().unwrap().state,
            GeneratorState::Failed("Describe your wallpaper first.".to_string())
        );
    }

    #[test]
    fn test_generated_item_is_prepended_and_shown() {
        let mut app = app();
        app.generation_seq = 3;
        let mut modal = GeneratorModal::default();
        modal.state = GeneratorState::Generating { seq: 3 };
        app.generator = Some(modal);

        app.handle_message(AppMessage::Generated {
            seq: 3,
            result: Ok(item("g")),
        });

        assert_eq!(app.home.items()[0].id, "g");
        assert_eq!(
            app.generator.as_ref().unwrap().state,
            GeneratorState::Done(item("g"))
        );
    }

    #[test]
    fn test_superseded_generation_is_dropped() {
        let mut app = app();
        app.generation_seq = 2;
        app.handle_message(AppMessage::Generated {
            seq: 1,
            result: Ok(item("old")),
        });
        assert!(app.home.is_empty());
    }

    #[test]
    fn test_generation_lands_after_modal_closed() {
        let mut app = app();
        app.generation_seq = 1;
        app.handle_message(AppMessage::Generated {
            seq: 1,
            result: Ok(item("late")),
        });
        assert_eq!(app.home.items()[0].id, "late");
        assert!(app.generator.is_none());
    }
}
