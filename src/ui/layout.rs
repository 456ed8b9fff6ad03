//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal size so render functions can decide
//! between the two-column layout (list plus detail card) and a single
//! column on narrow terminals.

use ratatui::layout::Rect;

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the detail card is dropped
    pub const SM_WIDTH: u16 = 80;
    /// Below this the dialog takes most of the width
    pub const XS_WIDTH: u16 = 60;
    /// Below this the header collapses to one row
    pub const SM_HEIGHT: u16 = 20;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Percentage of the width, clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let width = (u32::from(self.width) * u32::from(percentage.min(100)) / 100) as u16;
        width.clamp(min.min(self.width), max.max(min).min(self.width))
    }

    /// Whether the detail card fits next to the list.
    pub fn show_detail(&self) -> bool {
        !self.is_narrow()
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
