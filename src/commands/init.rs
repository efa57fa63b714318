//! # Init Command
//!
//! Initializes a new homeinv project in the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::{Config, ProjectConfig},
    inventory::Inventory,
    storage,
};

/// Executes the init command.
pub fn execute() -> Result<()> {
    let config = Config::for_init()?;

    // Check if already initialized
    let config_path = ProjectConfig::path(&config.project_root);
    if config_path.exists() {
        anyhow::bail!(
            "Project already initialized (found {})",
            config_path.display()
        );
    }

    // Create project config
    let project_config = ProjectConfig::default();
    project_config.save(&config.project_root)?;

    // Create the working file unless one is already there
    let data_path = project_config.data_path(&config.project_root);
    if data_path.exists() {
        tracing::info!(path = %data_path.display(), "keeping existing working file");
    } else {
        storage::save_to(&data_path, &Inventory::new())?;
    }

    println!("{} Initialized homeinv project", "✓".green());
    println!("  {} {}", "Config:".dimmed(), config_path.display());
    println!("  {} {}", "Inventory:".dimmed(), data_path.display());

    Ok(())
}
