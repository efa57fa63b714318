//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.homeinv` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATA_FILE, PROJECT_CONFIG_FILE};

/// Project configuration stored at .homeinv in project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Working file holding the inventory (default: "inventory.csv")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Currency symbol override (uses global setting if not set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            currency_symbol: None,
        }
    }
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl ProjectConfig {
    /// Finds the project root by searching for .homeinv file upward
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            if current.join(PROJECT_CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .homeinv in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Saves the project config to .homeinv
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = toml::to_string_pretty(self).context("Failed to serialize project config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }

    /// Returns the full path to the working inventory file
    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_file)
    }
}
