//! # Remove Command
//!
//! Deletes an item from the inventory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, storage, ui};

/// Executes the remove command.
///
/// Removing a name that is not in the inventory is not an error.
pub fn execute(name: &str) -> Result<()> {
    let config = Config::load()?;
    let mut inventory = storage::load(&config)?;

    let Some(removed) = inventory.remove(name) else {
        println!("{}", format!("No item named '{name}'.").dimmed());
        return Ok(());
    };

    storage::save(&config, &inventory)?;
    ui::print_success("Removed", &config, &removed);

    Ok(())
}
