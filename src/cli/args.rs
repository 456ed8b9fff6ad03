//! Command-line argument parsing for wallx.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::startup::config::MAX_PER_PAGE;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print a batch of random wallpapers
    Random { count: Option<u32> },
    /// Print one page of search results
    Search { query: String, page: u32 },
    /// Print one photo by id
    Photo { id: String },
    /// Print the category catalog
    Categories,
    /// Print one page of a category feed
    Category { name: String, page: u32 },
    /// Run the TUI application (default)
    RunTui,
    /// Arguments that could not be parsed; carries the reason
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: wallx [COMMAND]

Commands:
  random [N]                 Print N random wallpapers (1 to 30)
  search <query> [--page P]  Print one page of search results
  photo <id>                 Print a single photo
  categories                 List the wallpaper categories
  category <name> [--page P] Print one page of a category

Without a command, wallx starts the terminal UI.

Options:
  -h, --help     Show this help
  -V, --version  Show the version

Environment:
  UNSPLASH_ACCESS_KEY  Unsplash API access key (required)
  WALLX_LOG            Log filter, e.g. debug or wallx=trace";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use wallx::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["wallx".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::RunTui;
    };

    match command.as_str() {
        "random" => match rest {
            [] => CliCommand::Random { count: None },
            [n] => match n.parse::<u32>() {
                Ok(count) if (1..=MAX_PER_PAGE).contains(&count) => {
                    CliCommand::Random { count: Some(count) }
                }
                _ => CliCommand::Invalid(format!(
                    "invalid count: {} (expected 1 to {})",
                    n, MAX_PER_PAGE
                )),
            },
            _ => CliCommand::Invalid("random takes at most one argument".to_string()),
        },
        "search" => match parse_query(rest) {
            Ok((query, page)) => CliCommand::Search { query, page },
            Err(reason) => CliCommand::Invalid(format!("search: {}", reason)),
        },
        "category" => match parse_query(rest) {
            Ok((name, page)) => CliCommand::Category { name, page },
            Err(reason) => CliCommand::Invalid(format!("category: {}", reason)),
        },
        "photo" => match rest {
            [id] => CliCommand::Photo { id: id.clone() },
            _ => CliCommand::Invalid("photo takes exactly one id".to_string()),
        },
        "categories" => CliCommand::Categories,
        other => CliCommand::Invalid(format!("unknown command: {}", other)),
    }
}

/// Words joined into one query, plus an optional `--page P`.
fn parse_query(rest: &[String]) -> Result<(String, u32), String> {
    let mut words = Vec::new();
    let mut page = 1;
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        if arg == "--page" {
            match iter.next().map(|p| p.parse::<u32>()) {
                Some(Ok(p)) if p > 0 => page = p,
                _ => return Err("--page needs a positive number".to_string()),
            }
        } else {
            words.push(arg.as_str());
        }
    }

    let query = words.join(" ");
    if query.trim().is_empty() {
        return Err("missing query".to_string());
    }
    Ok((query, page))
}
