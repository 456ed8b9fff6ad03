//! wallx - browse, search and favorite wallpapers from Unsplash in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod feed;
pub mod generator;
pub mod models;
pub mod photo_client;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;

pub use error::{WallxError, WallxResult};
pub use photo_client::PhotoClient;
