//! Startup wiring: configuration, logging and the production photo client.

pub mod config;

pub use config::AppConfig;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::adapters::ReqwestHttpClient;
use crate::error::{PhotoError, WallxResult};
use crate::photo_client::PhotoClient;

/// Environment variable holding the tracing filter, e.g. `wallx=debug`.
pub const ENV_LOG_FILTER: &str = "WALLX_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Headless commands: log straight to stderr.
    Stderr,
    /// TUI mode: the terminal is taken, so log to a file.
    File(PathBuf),
}

/// Default log file: `<cache dir>/wallx/wallx.log`.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("wallx")
        .join("wallx.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging(target: LogTarget) -> WallxResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

/// File logging for the TUI. If the log file cannot be opened the TUI
/// still starts, without logs, after a warning on stderr. Returns the path
/// being logged to.
pub fn init_tui_logging(path: &Path) -> Option<PathBuf> {
    match init_logging(LogTarget::File(path.to_path_buf())) {
        Ok(()) => Some(path.to_path_buf()),
        Err(e) => {
            eprintln!(
                "wallx: logging disabled, cannot open {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Validate `config` and build the reqwest-backed photo client.
pub fn build_photo_client(config: &AppConfig) -> WallxResult<PhotoClient> {
    config.validate()?;
    let http = ReqwestHttpClient::with_timeout(config.request_timeout())
        .map_err(PhotoError::Transport)?;
    Ok(PhotoClient::from_config(config, Arc::new(http)))
}
