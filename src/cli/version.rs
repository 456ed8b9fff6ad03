//! Version command for wallx.

/// The current version of wallx, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("wallx {}", VERSION)
}
