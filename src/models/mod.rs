//! Data types shared by the photo client, the list controller and the UI.

mod category;
mod photo;
mod wallpaper;

pub use category::{find_category, Category, CATEGORIES};
pub use photo::{PhotoRecord, PhotoUrls, PhotoUser, SearchResponse};
pub use wallpaper::{Page, WallpaperItem, UNTITLED_TITLE};
