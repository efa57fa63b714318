//! # Add Command
//!
//! Adds an item to the inventory, or updates the item with the same name.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    config::Config,
    inventory::Upsert,
    item::InventoryItem,
    storage, ui,
};

/// Arguments for the add command
pub struct AddArgs {
    pub name: String,
    pub value: String,
    pub category: Option<String>,
    pub year: Option<String>,
}

/// Executes the add command.
pub fn execute(args: &AddArgs) -> Result<()> {
    let config = Config::load()?;

    // Validate before touching the working file
    let item = InventoryItem::from_input(
        &args.name,
        args.category.as_deref(),
        &args.value,
        args.year.as_deref(),
    )?;

    let mut inventory = storage::load(&config)?;
    let name = item.name().to_string();
    let outcome = inventory.upsert(item);
    storage::save(&config, &inventory)?;

    let verb = match outcome {
        Upsert::Inserted => "Added",
        Upsert::Updated => "Updated",
    };
    if let Some(stored) = inventory.get(&name) {
        ui::print_success(verb, &config, stored);
    }

    Ok(())
}
