//! # Storage
//!
//! Loads and saves the project's working inventory file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::Config,
    inventory::Inventory,
    tabular::delimited::{self, Precision},
    ui,
};

/// Loads the inventory from the working file.
///
/// A missing file is an empty inventory. Rows that fail to parse are dropped
/// and printed as warnings.
pub fn load(config: &Config) -> Result<Inventory> {
    let (inventory, warnings) = read(&config.data_path())?;
    ui::print_warnings(&warnings);
    Ok(inventory)
}

/// Loads the inventory from an explicit path. Warnings are only logged.
pub fn load_from(path: &Path) -> Result<Inventory> {
    read(path).map(|(inventory, _)| inventory)
}

/// Reads the working file, returning the inventory and row warnings
pub fn read(path: &Path) -> Result<(Inventory, Vec<String>)> {
    let mut inventory = Inventory::new();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no working file yet");
        return Ok((inventory, Vec::new()));
    }

    let report = delimited::import(&mut inventory, path)
        .with_context(|| format!("Failed to load inventory: {}", path.display()))?;
    for warning in &report.warnings {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    Ok((inventory, report.warnings))
}

/// Writes the inventory back to the working file.
pub fn save(config: &Config, inventory: &Inventory) -> Result<()> {
    save_to(&config.data_path(), inventory)
}

/// Writes the inventory to an explicit path. Values keep their full precision.
pub fn save_to(path: &Path, inventory: &Inventory) -> Result<()> {
    tracing::debug!(path = %path.display(), items = inventory.len(), "saving inventory");
    delimited::export(inventory, path, Precision::Full)
        .with_context(|| format!("Failed to save inventory: {}", path.display()))
}
