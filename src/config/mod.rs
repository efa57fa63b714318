//! # Configuration
//!
//! Merged configuration system combining global (~/.config/homeinv/config) and
//! project (.homeinv) settings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::PathBuf;

use anyhow::Result;

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration
    pub project: ProjectConfig,

    /// Resolved project root path
    pub project_root: PathBuf,
}

impl Config {
    /// Loads configuration from both global and project sources
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;

        let project_root = ProjectConfig::find_project_root().ok_or_else(|| {
            anyhow::anyhow!(
                "Not in a homeinv project (no .homeinv file found). Run `homeinv init` first."
            )
        })?;

        let project = ProjectConfig::load(&project_root)?;

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Creates a config for initialization (no existing project required)
    pub fn for_init() -> Result<Self> {
        let global = GlobalConfig::load()?;
        let project_root = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Cannot get current directory: {e}"))?;
        let project = ProjectConfig::default();

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Returns the effective currency symbol (project overrides global)
    pub fn currency_symbol(&self) -> &str {
        self.project
            .currency_symbol
            .as_deref()
            .unwrap_or(&self.global.currency_symbol)
    }

    /// Returns how many import warnings are listed before truncation
    pub const fn warning_limit(&self) -> usize {
        self.global.warning_limit
    }

    /// Returns the working inventory file path
    pub fn data_path(&self) -> PathBuf {
        self.project.data_path(&self.project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(project_symbol: Option<&str>) -> Config {
        Config {
            global: GlobalConfig {
                currency_symbol: "$".to_string(),
                ..GlobalConfig::default()
            },
            project: ProjectConfig {
                currency_symbol: project_symbol.map(String::from),
                ..ProjectConfig::default()
            },
            project_root: PathBuf::from("/house"),
        }
    }

    #[test]
    fn test_project_currency_overrides_global() {
        assert_eq!(config(None).currency_symbol(), "$");
        assert_eq!(config(Some("£")).currency_symbol(), "£");
    }

    #[test]
    fn test_data_path_is_under_project_root() {
        assert_eq!(
            config(None).data_path(),
            PathBuf::from("/house/inventory.csv")
        );
    }
}
