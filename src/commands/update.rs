//! # Update Command
//!
//! Edits fields of an existing inventory item.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    item::{parse_value, validate_year_strict, ItemError},
    storage, ui,
};

/// Arguments for the update command
#[derive(Debug, Default)]
pub struct UpdateArgs {
    pub name: String,
    pub value: Option<String>,
    pub category: Option<String>,
    pub clear_category: bool,
    pub year: Option<String>,
    pub clear_year: bool,
    pub rename: Option<String>,
}

/// Executes the update command.
pub fn execute(args: UpdateArgs) -> Result<()> {
    let config = Config::load()?;
    let mut inventory = storage::load(&config)?;

    let item = inventory
        .get_mut(&args.name)
        .ok_or_else(|| ItemError::NotFound(args.name.clone()))?;

    let mut changed = false;

    // Update value
    if let Some(ref raw) = args.value {
        let value = parse_value(raw).ok_or_else(|| ItemError::InvalidValue(raw.clone()))?;
        if value != item.value() {
            item.set_value(value)?;
            changed = true;
        }
    }

    // Update category
    if args.clear_category {
        if item.category().is_some() {
            item.set_category(None);
            changed = true;
        }
    } else if let Some(ref category) = args.category {
        if item.category() != Some(category.trim()) {
            item.set_category(Some(category));
            changed = true;
        }
    }

    // Update year
    if args.clear_year {
        if item.year_purchased().is_some() {
            item.set_year_purchased(None);
            changed = true;
        }
    } else if let Some(ref raw) = args.year {
        let year = validate_year_strict(raw)?;
        if item.year_purchased() != Some(year) {
            item.set_year_purchased(Some(year));
            changed = true;
        }
    }

    // Rename last so the lookup above used the old name
    let mut name = item.name().to_string();
    if let Some(ref new_name) = args.rename {
        if new_name.trim() != name {
            inventory.rename(&name, new_name)?;
            name = new_name.trim().to_string();
            changed = true;
        }
    }

    if !changed {
        println!("{}", "No changes to apply.".dimmed());
        return Ok(());
    }

    storage::save(&config, &inventory)?;

    if let Some(item) = inventory.get(&name) {
        ui::print_success("Updated", &config, item);
    }

    Ok(())
}
