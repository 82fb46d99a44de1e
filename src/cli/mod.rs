//
//  atlassian-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod assets;
mod bitbucket;
mod config;
mod confluence;
mod jira;
mod session;

pub use api::ApiCommand;
pub use assets::AssetsCommand;
pub use bitbucket::BitbucketCommand;
pub use config::ConfigCommand;
pub use confluence::ConfluenceCommand;
pub use jira::JiraCommand;
pub use session::Session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::api::Continuation;

/// atl - Work with Jira, Confluence, Assets and Bitbucket from the command line
#[derive(Parser, Debug)]
#[command(
    name = "atl",
    version,
    about = "Work with Atlassian Cloud from the command line",
    long_about = "atl is a thin CLI over the Jira, Confluence, Assets and Bitbucket REST APIs.\n\n\
                  Credentials come from flags or ATLASSIAN_* environment variables; \
                  the site and defaults can be stored with 'atl config set'.",
    propagate_version = true,
    after_help = "Use 'atl <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Atlassian site, e.g. https://example.atlassian.net
    #[arg(long, global = true, env = "ATLASSIAN_SITE")]
    pub site: Option<String>,

    /// Account e-mail for basic authentication
    #[arg(long, global = true, env = "ATLASSIAN_EMAIL")]
    pub email: Option<String>,

    /// API token (basic auth with --email, bearer token otherwise)
    #[arg(long, global = true, env = "ATLASSIAN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Custom User-Agent header
    #[arg(long, global = true, env = "ATLASSIAN_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make API requests against the configured site
    Api(ApiCommand),

    /// Work with Jira issues and attachments
    Jira(JiraCommand),

    /// Search and browse Confluence content
    #[command(visible_alias = "wiki")]
    Confluence(ConfluenceCommand),

    /// Work with Assets objects
    Assets(AssetsCommand),

    /// Inspect Bitbucket workspace permissions
    #[command(visible_alias = "bb")]
    Bitbucket(BitbucketCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Splits a comma separated flag value into trimmed, non-empty items.
pub(crate) fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// The offset of the page after `current`, when `--all` asks for it and the
/// server's continuation actually moves forward.
pub(crate) fn next_offset(all: bool, next: Continuation, current: u64) -> Option<u64> {
    if !all || !next.has_more {
        return None;
    }
    next.next
        .and_then(|token| token.parse().ok())
        .filter(|offset| *offset > current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "atl",
            "jira",
            "issue",
            "get",
            "DUMMY-3",
            "--site",
            "https://example.atlassian.net",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.global.site.as_deref(), Some("https://example.atlassian.net"));
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::Jira(_)));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some("summary, status,,")), vec!["summary", "status"]);
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_next_offset() {
        assert_eq!(next_offset(true, Continuation::more("50"), 25), Some(50));
        assert_eq!(next_offset(false, Continuation::more("50"), 25), None);
        assert_eq!(next_offset(true, Continuation::more("25"), 25), None);
        assert_eq!(next_offset(true, Continuation::more("abc"), 0), None);
        assert_eq!(next_offset(true, Continuation::done(), 0), None);
    }
}
