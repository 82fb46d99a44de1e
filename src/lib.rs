//
//  atlassian-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Atlassian Client Library
//!
//! A typed REST client for Atlassian Cloud products, plus the `atl`
//! command-line front end built on top of it.
//!
//! ## Overview
//!
//! Every call goes through the same small pipeline: validate identifiers,
//! build the query string, encode the payload, build the request against
//! the configured site, execute it through an injected transport and wrap
//! the outcome in a [`Response`](api::Response) envelope.
//!
//! ## Features
//!
//! - **Jira**: issues, custom fields, edit operations and attachments (v2/v3)
//! - **Confluence**: CQL search, content, page trees and content properties
//! - **Assets**: objects, AQL filters, history and linked tickets
//! - **Bitbucket Cloud**: workspace and repository permissions
//! - **Cancellation**: every call is bound to a [`RequestContext`](api::RequestContext)
//!
//! ## Module Structure
//!
//! - [`api`]: Request pipeline and the resource services
//! - [`auth`]: Credentials attached to each request
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use atlassian_client::api::confluence::{SearchContentOptions, SearchService};
//! use atlassian_client::api::{Client, ReqwestTransport, RequestContext};
//! use atlassian_client::auth::Credentials;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let credentials = Credentials::default().with_basic_auth("mail@example.com", "api-token");
//! let client = Client::new(
//!     Arc::new(ReqwestTransport::new()?),
//!     "https://example.atlassian.net",
//!     credentials,
//! )?;
//!
//! let search = SearchService::new(Arc::new(client));
//! let (page, response) = search
//!     .content(&RequestContext::background(), "type=page", &SearchContentOptions::default())
//!     .await?;
//! println!("{} -> {} results", response.code, page.results.len());
//! # Ok(())
//! # }
//! ```

/// Request pipeline and resource services.
///
/// The [`api::Client`] implements [`api::Connector`]; services for each
/// product hold an `Arc<dyn Connector>` and return `(T, Response)` pairs.
pub mod api;

/// Authentication providers.
///
/// Basic credentials (e-mail plus API token), bearer tokens and a custom
/// user agent, supplied through the [`auth::Authentication`] trait.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains the `atl` commands defined using the clap derive API. Each
/// command module builds its services from a shared [`cli::Session`].
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/atl/config.toml`
/// - macOS: `~/Library/Application Support/atl/config.toml`
/// - Windows: `%APPDATA%\atl\config\config.toml`
pub mod config;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use atlassian_client::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// # Example
///
/// ```rust,no_run
/// use atlassian_client::Config;
///
/// let config = Config::load().expect("Failed to load config");
/// if let Some(site) = config.get("site") {
///     println!("Site: {}", site);
/// }
/// ```
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
///
/// # Value
///
/// `"atl"`
pub const APP_NAME: &str = "atl";

/// Application version constant, taken from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use atlassian_client::VERSION;
///
/// println!("atl version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use atlassian_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::{ApiError, ErrorKind, TransportError};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including missing identifiers.
    pub const USAGE: i32 = 2;

    /// The site rejected the credentials (401 or 403).
    ///
    /// # Value
    ///
    /// `4`
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (404).
    ///
    /// # Value
    ///
    /// `8`
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by Ctrl+C or a passed deadline.
    ///
    /// # Value
    ///
    /// `16`
    pub const CANCELLED: i32 = 16;

    /// API rate limit exceeded (429).
    ///
    /// # Value
    ///
    /// `32`
    pub const RATE_LIMIT: i32 = 32;

    /// Picks the exit code for an error returned by a command.
    ///
    /// Errors that do not wrap an [`ApiError`] map to [`ERROR`].
    pub fn for_error(err: &anyhow::Error) -> i32 {
        let Some(api) = err.downcast_ref::<ApiError>() else {
            return ERROR;
        };

        match api {
            ApiError::Transport(TransportError::Cancelled | TransportError::DeadlineExceeded)
            | ApiError::Body {
                source: TransportError::Cancelled | TransportError::DeadlineExceeded,
                ..
            } => CANCELLED,
            ApiError::InvalidStatusCode(response) => match response.code {
                401 | 403 => AUTH_ERROR,
                404 => NOT_FOUND,
                429 => RATE_LIMIT,
                _ => ERROR,
            },
            _ if api.kind() == ErrorKind::Validation => USAGE,
            _ => ERROR,
        }
    }

}
