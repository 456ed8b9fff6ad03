//! Wallpaper list and detail card.
//!
//! Used by Home, Category, Search and Favorites. The list shows one card
//! per row; the detail card on the right shows the selected wallpaper.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::WallpaperItem;
use crate::state::{FetchKind, LoadStatus};

use super::helpers::{spinner_frame, truncate_to_width, url_host};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_HEADER,
    COLOR_LOADING,
};

/// Everything the list view needs, borrowed from the app.
pub struct GridView<'a> {
    pub title: String,
    pub items: Vec<&'a WallpaperItem>,
    pub selected: usize,
    pub status: Option<&'a LoadStatus>,
    pub has_more: bool,
    /// Shown when there is nothing to list
    pub empty_hint: &'static str,
}

pub fn render_grid(frame: &mut Frame, area: Rect, view: &GridView, tick: u64) {
    let ctx = LayoutContext::from_rect(area);
    let (list_area, detail_area) = if ctx.show_detail() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    render_list(frame, list_area, view, tick);
    if let Some(detail_area) = detail_area {
        render_detail(frame, detail_area, view.items.get(view.selected).copied());
    }
}

fn render_list(frame: &mut Frame, area: Rect, view: &GridView, tick: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", view.title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let refreshing = matches!(view.status, Some(LoadStatus::Loading(FetchKind::Refresh)));
    if view.items.is_empty() {
        let line = if refreshing {
            Line::from(vec![
                Span::styled(spinner_frame(tick), Style::default().fg(COLOR_LOADING)),
                Span::raw(" Loading wallpapers..."),
            ])
        } else if matches!(view.status, Some(LoadStatus::Error { .. })) {
            Line::from(Span::styled(
                "Could not load wallpapers. Press r to retry.",
                Style::default().fg(COLOR_ERROR),
            ))
        } else {
            Line::from(Span::styled(view.empty_hint, Style::default().fg(COLOR_DIM)))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let mut rows: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| card_row(item, width))
        .collect();

    match view.status {
        Some(LoadStatus::Loading(_)) => rows.push(ListItem::new(Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(COLOR_LOADING)),
            Span::styled(
                if refreshing { " Refreshing..." } else { " Loading more..." },
                Style::default().fg(COLOR_DIM),
            ),
        ]))),
        Some(LoadStatus::Idle) if !view.has_more => rows.push(ListItem::new(Line::from(
            Span::styled("  No more wallpapers", Style::default().fg(COLOR_DIM)),
        ))),
        _ => {}
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(view.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_row<'a>(item: &WallpaperItem, width: usize) -> ListItem<'a> {
    let heart = if item.is_favorite { "♥ " } else { "  " };
    let mut spans = vec![
        Span::styled(heart, Style::default().fg(COLOR_FAVORITE)),
        Span::raw(truncate_to_width(&item.title, width.saturating_sub(2))),
    ];
    if let Some(category) = &item.category {
        spans.push(Span::styled(
            format!("  [{}]", category),
            Style::default().fg(COLOR_DIM),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn render_detail(frame: &mut Frame, area: Rect, item: Option<&WallpaperItem>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Preview ");

    let Some(item) = item else {
        frame.render_widget(block, area);
        return;
    };

    let label = Style::default().fg(COLOR_DIM);
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("By        ", label),
            Span::raw(item.author.clone().unwrap_or_else(|| "Unknown".to_string())),
        ]),
        Line::from(vec![
            Span::styled("Image     ", label),
            Span::raw(url_host(&item.image_url).to_string()),
        ]),
    ];
    if let Some(category) = &item.category {
        lines.push(Line::from(vec![
            Span::styled("Category  ", label),
            Span::raw(category.clone()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Favorite  ", label),
        if item.is_favorite {
            Span::styled("♥ yes", Style::default().fg(COLOR_FAVORITE))
        } else {
            Span::raw("no")
        },
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "f favorite · o open full size",
        label,
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
