// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.
//!
//! Limits default to the project conventions (72-character titles, 50-character
//! subjects, 72-character body lines) and may be overridden from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, LogcheckError, Result};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["logcheck.toml", ".logcheck.toml"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    pub limits: LimitsConfig,
}

/// Length limits and search bounds for the checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LimitsConfig {
    /// Maximum title length (error above this).
    pub title: usize,
    /// Recommended subject length excluding the module prefix (warning above).
    pub subject: usize,
    /// Maximum body line length (error above this).
    pub body_line: usize,
    /// How deep below the tree root a bare module name may match a directory.
    pub module_search_depth: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            title: 72,
            subject: 50,
            body_line: 72,
            module_search_depth: 3,
        }
    }
}

impl CheckConfig {
    /// Load configuration from the default locations, falling back to defaults.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading configuration from: {:?}", path);

        if !path.exists() {
            return Err(LogcheckError::Config(ConfigError::NotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            LogcheckError::Config(ConfigError::ParseError {
                message: format!("Failed to read config file: {}", e),
            })
        })?;

        parse_config(&content)
    }
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CheckConfig> {
    toml::from_str(content).map_err(|e| {
        LogcheckError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
