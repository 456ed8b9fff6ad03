//! UI rendering for wallx
//!
//! Layout, top to bottom:
//! - Header
//! - Body: wallpaper list (with detail card) or the category picker
//! - Status line: current error with retry hint, or the last status message
//! - Navigation bar: Home · Categories · Generate · Favorites
//!
//! The generator modal and the search bar are drawn over the body.

mod categories;
mod dialogs;
mod grid;
mod helpers;
mod layout;
mod nav_bar;
mod theme;

pub use helpers::truncate_to_width;
pub use layout::LayoutContext;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Screen};
use categories::render_categories;
use dialogs::{render_generator, render_search_bar};
use grid::{render_grid, GridView};
use nav_bar::{render_header, render_nav_bar, render_status_line};

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let body = chunks[1];
    match app.screen {
        Screen::Categories => render_categories(frame, body, app.category_index),
        Screen::Favorites => {
            let view = GridView {
                title: "Favorites".to_string(),
                items: app.favorite_items(),
                selected: app.favorites_index,
                status: None,
                has_more: true,
                empty_hint: "No favorites yet. Press f on a wallpaper to keep it here.",
            };
            render_grid(frame, body, &view, app.tick_count);
        }
        Screen::Home | Screen::Category | Screen::Search => {
            if let Some(list) = app.current_list() {
                let view = GridView {
                    title: list.source().title(),
                    items: list.items().iter().collect(),
                    selected: list.selected_index(),
                    status: Some(list.status()),
                    has_more: list.has_more(),
                    empty_hint: "No wallpapers found.",
                };
                render_grid(frame, body, &view, app.tick_count);
            }
        }
    }

    render_status_line(frame, chunks[2], app);
    render_nav_bar(frame, chunks[3], app);

    if let Some(modal) = &app.generator {
        render_generator(frame, body, modal, app.tick_count);
    } else if let Some(query) = &app.search_input {
        render_search_bar(frame, body, query);
    }
}
