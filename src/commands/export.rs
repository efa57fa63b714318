//! # Export Command
//!
//! Writes the inventory to a spreadsheet or delimited text file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    constants::EXPORT_FILE_PREFIX,
    storage,
    tabular::{self, Format},
};

/// Default export file name: `inventory_value<YYYYMMDD_HHMMSS>.xlsx`
pub fn default_file_name(now: NaiveDateTime) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Executes the export command.
///
/// Without a path, writes a timestamped workbook to the project root.
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let inventory = storage::load(&config)?;

    if inventory.is_empty() {
        println!("{}", "No data to export.".dimmed());
        return Ok(());
    }

    let path = path.unwrap_or_else(|| {
        config
            .project_root
            .join(default_file_name(Local::now().naive_local()))
    });
    let format = tabular::export_file(&inventory, &path)?;

    let kind = match format {
        Format::Spreadsheet => "spreadsheet",
        Format::Delimited => "text",
    };
    println!(
        "{} Exported {} items ({kind}): {}",
        "✓".green(),
        inventory.len(),
        path.display()
    );

    Ok(())
}
