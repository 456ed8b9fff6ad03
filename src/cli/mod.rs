//! CLI module for wallx.
//!
//! - Argument parsing
//! - Version and help
//! - Headless commands that print photos instead of starting the TUI
//!
//! # Usage
//!
//! ```ignore
//! use wallx::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use std::io::{self, Write};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::error::{WallxError, WallxResult};
use crate::models::{find_category, CATEGORIES};
use crate::photo_client::PhotoClient;
use crate::startup::{build_photo_client, init_logging, AppConfig, LogTarget};

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::RunTui => None,
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => Some(Err(eyre!("{}\n\n{}", reason, USAGE))),
        CliCommand::Categories => {
            Some(output::write_categories(&mut io::stdout().lock(), &CATEGORIES).map_err(Into::into))
        }
        command => Some(run_api_command(command)),
    }
}

/// Commands that talk to the photo API.
fn run_api_command(command: CliCommand) -> Result<()> {
    init_logging(LogTarget::Stderr)?;
    let config = AppConfig::from_env()?;
    let client = build_photo_client(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(execute(&client, &config, command, &mut stdout))?;
    Ok(())
}

/// Run a headless command against `client`, writing the listing to `out`.
///
/// Uses the strict client calls so failures reach the exit status instead
/// of printing an empty list.
pub async fn execute<W: Write>(
    client: &PhotoClient,
    config: &AppConfig,
    command: CliCommand,
    out: &mut W,
) -> WallxResult<()> {
    match command {
        CliCommand::Random { count } => {
            let count = count.unwrap_or(config.random_count);
            let items = client.random(count).await?;
            output::write_header(out, &format!("{} random wallpapers", items.len()))?;
            output::write_items(out, &items)?;
        }
        CliCommand::Search { query, page } => {
            let result = client.search(&query, page, config.per_page).await?;
            let total = result.total.unwrap_or(0);
            output::write_header(
                out,
                &format!("Results for \"{}\" (page {}, {} total)", query, page, total),
            )?;
            output::write_items(out, &result.items)?;
        }
        CliCommand::Category { name, page } => {
            let category = find_category(&name).ok_or(WallxError::UnknownCategory(name))?;
            let result = client
                .by_category(category.name, page, config.per_page)
                .await?;
            output::write_header(out, &format!("{} (page {})", category.name, page))?;
            output::write_items(out, &result.items)?;
        }
        CliCommand::Photo { id } => match client.by_id(&id).await? {
            Some(item) => output::write_item(out, &item)?,
            None => writeln!(out, "No photo with id {}", id)?,
        },
        CliCommand::Categories => output::write_categories(out, &CATEGORIES)?,
        other => tracing::debug!("{:?} is not an API command", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use std::sync::Arc;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(CliCommand::RunTui).is_none());
    }

    #[test]
    fn test_invalid_is_error_with_usage() {
        let err = run_cli_command(CliCommand::Invalid("unknown command: x".into()))
            .unwrap()
            .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("unknown command: x"));
        assert!(text.contains("Usage: wallx"));
    }

    #[tokio::test]
    async fn test_execute_photo_not_found() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(404, "{}"));
        let client = PhotoClient::new(Arc::new(mock), "https://api.test", "k");

        let mut out = Vec::new();
        execute(
            &client,
            &AppConfig::default(),
            CliCommand::Photo { id: "nope".into() },
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No photo with id nope\n");
    }

    #[tokio::test]
    async fn test_execute_random_uses_config_count() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, "[]"));
        let client = PhotoClient::new(Arc::new(mock.clone()), "https://api.test", "k");

        let mut out = Vec::new();
        let config = AppConfig::default().with_random_count(7);
        execute(&client, &config, CliCommand::Random { count: None }, &mut out)
            .await
            .unwrap();
        assert_eq!(
            mock.get_requests()[0].url,
            "https://api.test/photos/random?count=7"
        );
        assert!(String::from_utf8(out).unwrap().contains("(no wallpapers)"));
    }

    #[tokio::test]
    async fn test_execute_category_resolves_by_id() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, r#"{"total":0,"results":[]}"#));
        let client = PhotoClient::new(Arc::new(mock.clone()), "https://api.test", "k");

        let mut out = Vec::new();
        let command = CliCommand::Category {
            name: "nature".into(),
            page: 2,
        };
        execute(&client, &AppConfig::default(), command, &mut out)
            .await
            .unwrap();
        let url = &mock.get_requests()[0].url;
        assert!(url.contains("query=Nature"));
        assert!(url.contains("page=2"));
        assert!(String::from_utf8(out).unwrap().starts_with("Nature (page 2)"));
    }

    #[tokio::test]
    async fn test_execute_unknown_category_fails_without_request() {
        let mock = MockHttpClient::new();
        let client = PhotoClient::new(Arc::new(mock.clone()), "https://api.test", "k");

        let mut out = Vec::new();
        let command = CliCommand::Category {
            name: "lava".into(),
            page: 1,
        };
        let err = execute(&client, &AppConfig::default(), command, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, WallxError::UnknownCategory(ref name) if name == "lava"));
        assert!(mock.get_requests().is_empty());
        assert!(out.is_empty());
    }
}
