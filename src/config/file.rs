//
//  atlassian-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Plain file helpers used by [`Config`](super::Config). Writes create the
//! parent directory first; reads return the raw TOML text.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use atlassian_client::config::{config_exists, read_config_file, write_config_file};
//!
//! let path = Path::new("/tmp/atl/config.toml");
//! if !config_exists(path) {
//!     write_config_file(path, "[site]\nurl = \"https://example.atlassian.net\"\n")?;
//! }
//! println!("{}", read_config_file(path)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole configuration file.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes `content`, creating parent directories as needed.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
