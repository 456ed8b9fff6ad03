//! AppMessage enum for async communication within the application.

use crate::error::PhotoError;
use crate::models::{Page, WallpaperItem};
use crate::state::FetchTicket;

/// Results of background work, delivered to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A feed fetch finished
    PageLoaded {
        ticket: FetchTicket,
        result: Result<Page, PhotoError>,
    },
    /// A generator request finished
    Generated {
        seq: u64,
        result: Result<WallpaperItem, PhotoError>,
    },
}
