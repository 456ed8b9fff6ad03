//! Category picker.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::CATEGORIES;

use super::helpers::url_host;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_categories(frame: &mut Frame, area: Rect, selected: usize) {
    let ctx = LayoutContext::from_rect(area);
    let rows: Vec<ListItem> = CATEGORIES
        .iter()
        .map(|category| {
            let mut spans = vec![Span::raw(format!("{:<12}", category.name))];
            if !ctx.is_narrow() {
                spans.push(Span::styled(
                    url_host(category.image_url).to_string(),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Categories ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
