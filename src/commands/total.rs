//! # Total Command
//!
//! Prints the total value of the inventory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, ui};

/// Executes the total command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let inventory = storage::load(&config)?;

    println!(
        "Total Value: {}",
        ui::format_money(inventory.total(), config.currency_symbol())
    );

    Ok(())
}
