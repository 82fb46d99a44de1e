//
//  atlassian-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings of the `atl` command line tool, persisted as TOML in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/atl/config.toml`
//! - **macOS**: `~/Library/Application Support/atl/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\atl\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [site]
//! url = "https://example.atlassian.net"
//! email = "mail@example.com"
//! user_agent = "curl/7.54.0"
//! timeout = 30
//!
//! [defaults]
//! jira_version = "3"
//! assets_workspace = "workspace-uuid"
//! bitbucket_workspace = "my-team"
//! ```
//!
//! API tokens are never stored here. They come from `ATLASSIAN_TOKEN` or
//! the `--token` flag.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atlassian_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("site", "https://example.atlassian.net")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "site",
    "email",
    "user_agent",
    "timeout",
    "jira_version",
    "assets_workspace",
    "bitbucket_workspace",
];

/// Persistent configuration of the `atl` tool.
///
/// # Notes
///
/// - Every section uses `#[serde(default)]`, so partial files load fine
/// - The file is created on first save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Connection settings for one Atlassian site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL, e.g. `https://example.atlassian.net`.
    #[serde(default)]
    pub url: Option<String>,

    /// Account e-mail used for basic authentication.
    #[serde(default)]
    pub email: Option<String>,

    /// Custom `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: None,
            email: None,
            user_agent: None,
            timeout: default_timeout(),
        }
    }
}

/// Defaults applied when a command omits an argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Jira REST API version, `"2"` or `"3"`.
    #[serde(default = "default_jira_version")]
    pub jira_version: String,

    #[serde(default)]
    pub assets_workspace: Option<String>,

    #[serde(default)]
    pub bitbucket_workspace: Option<String>,
}

fn default_jira_version() -> String {
    "3".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            jira_version: default_jira_version(),
            assets_workspace: None,
            bitbucket_workspace: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields [`Config::default`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the configuration file.
    ///
    /// `ATL_CONFIG_DIR` overrides the platform directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("ATL_CONFIG_DIR") {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir).join("config.toml"));
            }
        }

        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a setting by key. Unset values and unknown keys yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "site" => self.site.url.clone(),
            "email" => self.site.email.clone(),
            "user_agent" => self.site.user_agent.clone(),
            "timeout" => Some(self.site.timeout.to_string()),
            "jira_version" => Some(self.defaults.jira_version.clone()),
            "assets_workspace" => self.defaults.assets_workspace.clone(),
            "bitbucket_workspace" => self.defaults.bitbucket_workspace.clone(),
            _ => None,
        }
    }

    /// Updates a setting by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys, non-numeric timeouts and Jira versions other
    /// than `2` or `3`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "site" => self.site.url = Some(value.to_string()),
            "email" => self.site.email = Some(value.to_string()),
            "user_agent" => self.site.user_agent = Some(value.to_string()),
            "timeout" => {
                self.site.timeout = value
                    .parse()
                    .map_err(|_| anyhow!("timeout must be a whole number of seconds, got '{}'", value))?
            }
            "jira_version" => {
                if value != "2" && value != "3" {
                    bail!("jira_version must be 2 or 3, got '{}'", value);
                }
                self.defaults.jira_version = value.to_string();
            }
            "assets_workspace" => self.defaults.assets_workspace = Some(value.to_string()),
            "bitbucket_workspace" => self.defaults.bitbucket_workspace = Some(value.to_string()),
            _ => bail!("unknown config key '{}'; valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    /// Resets a setting to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "site" => self.site.url = None,
            "email" => self.site.email = None,
            "user_agent" => self.site.user_agent = None,
            "timeout" => self.site.timeout = default_timeout(),
            "jira_version" => self.defaults.jira_version = default_jira_version(),
            "assets_workspace" => self.defaults.assets_workspace = None,
            "bitbucket_workspace" => self.defaults.bitbucket_workspace = None,
            _ => bail!("unknown config key '{}'; valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }
}
