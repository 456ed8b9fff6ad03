//! Client-side state that outlives a single render.

pub mod favorites;
pub mod wallpaper_list;

pub use favorites::Favorites;
pub use wallpaper_list::{ApplyOutcome, FetchKind, FetchTicket, LoadStatus, WallpaperList};
