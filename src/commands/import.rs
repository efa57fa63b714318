//! # Import Command
//!
//! Merges a spreadsheet or delimited text file into the inventory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::{config::Config, storage, tabular, ui};

/// Executes the import command.
///
/// Bad rows are reported as warnings and do not stop the import.
pub fn execute(path: &Path) -> Result<()> {
    let config = Config::load()?;

    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let mut inventory = storage::load(&config)?;
    let report = tabular::import_file(&mut inventory, path)?;

    if report.imported() > 0 {
        storage::save(&config, &inventory)?;
    }

    println!("{}", report.summary(config.warning_limit()));
    println!(
        "{}",
        format!("{} added, {} updated", report.inserted, report.updated).dimmed()
    );
    println!(
        "Total Value: {}",
        ui::format_money(inventory.total(), config.currency_symbol())
    );

    Ok(())
}
