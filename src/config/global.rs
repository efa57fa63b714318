//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/homeinv/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_WARNING_LIMIT, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/homeinv/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Symbol prefixed to money amounts in terminal output
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Directory for console session saves (default: current directory)
    #[serde(default)]
    pub console_save_dir: Option<PathBuf>,

    /// Number of import warnings listed before the summary is truncated
    #[serde(default = "default_warning_limit")]
    pub warning_limit: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            console_save_dir: None,
            warning_limit: DEFAULT_WARNING_LIMIT,
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_warning_limit() -> usize {
    DEFAULT_WARNING_LIMIT
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/homeinv/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME),
            );
        }
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the global config, falling back to defaults when the file is missing.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            tracing::debug!("no home directory, using default global config");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }
}
