//
//  atlassian-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the keys listed in [`KEYS`]. The API token is not a
//! config key; it only comes from `--token` or `ATLASSIAN_TOKEN`.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::config::{Config, KEYS};

use super::{print_json, GlobalOptions};

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Reset a configuration value to its default
    Unset {
        /// Configuration key
        key: String,
    },

    /// Show all configuration values
    #[command(visible_alias = "list", visible_alias = "ls")]
    Show,

    /// Show configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get { key } => {
                let config = Config::load()?;
                let value = config.get(key);
                if global.json {
                    print_json(&json!({ "key": key, "value": value }))?;
                } else if let Some(value) = value {
                    println!("{}", value);
                }
                Ok(())
            }

            ConfigSubcommand::Set { key, value } => {
                let mut config = Config::load()?;
                config.set(key, value)?;
                config.save()?;

                if global.json {
                    print_json(&json!({ "success": true, "key": key, "value": config.get(key) }))?;
                } else {
                    println!("Set {} = {}", key, value.trim());
                }
                Ok(())
            }

            ConfigSubcommand::Unset { key } => {
                let mut config = Config::load()?;
                config.unset(key)?;
                config.save()?;

                if global.json {
                    print_json(&json!({ "success": true, "key": key }))?;
                } else {
                    println!("Unset {}", key);
                }
                Ok(())
            }

            ConfigSubcommand::Show => {
                let config = Config::load()?;
                if global.json {
                    return print_json(&config);
                }
                for key in KEYS {
                    println!("{:<20} {}", key, config.get(key).unwrap_or_else(|| "-".to_string()));
                }
                Ok(())
            }

            ConfigSubcommand::Path => {
                let path = Config::config_path()?;
                if global.json {
                    print_json(&json!({ "path": path.display().to_string(), "exists": path.exists() }))?;
                } else {
                    println!("{}", path.display());
                }
                Ok(())
            }
        }
    }
}
