//! Color theme constants for the wallx UI
//!
//! Dark palette with a single neon accent.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the selected row and the active tab
pub const COLOR_ACCENT: Color = Color::Rgb(255, 0, 128); // neon pink #FF0080

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Favorite marker
pub const COLOR_FAVORITE: Color = Color::Rgb(255, 77, 109);

/// Spinner and "loading" text
pub const COLOR_LOADING: Color = Color::Cyan;

/// Error text in the status line
pub const COLOR_ERROR: Color = Color::Red;

/// Success feedback (generated, favorited)
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Background for dialog boxes (generator, search)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
