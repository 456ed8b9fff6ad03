//! Header, status line and bottom navigation bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Tab};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

pub fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "wallx",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  wallpapers from Unsplash", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One line of feedback: the current list's error takes precedence over
/// the last status message.
pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.current_error() {
        Line::from(vec![
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
            Span::styled("  (r to retry)", Style::default().fg(COLOR_DIM)),
        ])
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_SUCCESS),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(area);
    let active = if app.generator.is_some() {
        Tab::Generate
    } else {
        app.screen.tab()
    };

    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.label()), style));
    }
    if !ctx.is_narrow() {
        spans.push(Span::styled(
            "  / search · r refresh · q quit",
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
