//! Overlays: the generator modal and the search bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{GeneratorModal, GeneratorState};
use crate::generator::SUGGESTED_KEYWORDS;

use super::helpers::{spinner_frame, url_host};
use super::layout::{centered_rect, LayoutContext};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_LOADING, COLOR_SUCCESS,
};

/// Clear a centered box and draw its frame. Returns the inner area.
fn dialog_frame(frame: &mut Frame, area: Rect, title: &str, height: u16) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let width = if ctx.is_extra_small() {
        area.width.saturating_sub(4)
    } else {
        ctx.bounded_width(60, 40, 72)
    };
    let dialog = centered_rect(area, width, height + 2);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    inner
}

pub fn render_generator(frame: &mut Frame, area: Rect, modal: &GeneratorModal, tick: u64) {
    let inner = dialog_frame(frame, area, "Generate Wallpaper", 10);
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(COLOR_ACCENT)),
        Span::raw(modal.prompt.as_str().to_string()),
        Span::styled("▏", Style::default().fg(COLOR_ACCENT)),
    ])];
    lines.push(Line::default());

    let mut keywords = Vec::new();
    for (i, keyword) in SUGGESTED_KEYWORDS.iter().enumerate() {
        let style = if i == modal.keyword_index {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        keywords.push(Span::styled(format!("{} ", keyword), style));
    }
    lines.push(Line::from(keywords));
    lines.push(Line::default());

    match &modal.state {
        GeneratorState::Editing => lines.push(Line::from(Span::styled(
            "Enter generate · Tab/Shift+Tab pick keyword · Ctrl+A add · Esc close",
            dim,
        ))),
        GeneratorState::Generating { .. } => lines.push(Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(COLOR_LOADING)),
            Span::raw(" Generating..."),
        ])),
        GeneratorState::Failed(reason) => lines.push(Line::from(Span::styled(
            reason.clone(),
            Style::default().fg(COLOR_ERROR),
        ))),
        GeneratorState::Done(item) => {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(COLOR_SUCCESS)),
                Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "by {} · {}",
                    item.author.as_deref().unwrap_or("Unknown"),
                    url_host(&item.image_url)
                ),
                dim,
            )));
            lines.push(Line::from(Span::styled(
                "Added to Home. Enter view · r generate another · Esc close",
                dim,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, query: &str) {
    let inner = dialog_frame(frame, area, "Search", 1);
    let line = Line::from(vec![
        Span::styled("/ ", Style::default().fg(COLOR_ACCENT)),
        Span::raw(query.to_string()),
        Span::styled("▏", Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
