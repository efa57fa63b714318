//! # Categories Command
//!
//! Lists all categories used across items with their item counts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, item::InventoryItem, storage, ui};

/// Executes the categories command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;

    let inventory = storage::load(&config)?;
    if inventory.is_empty() {
        println!("{}", "No items found.".dimmed());
        return Ok(());
    }

    let counts = ui::count_by(&inventory, |item: &InventoryItem| {
        item.category().map(String::from)
    });

    // Names come sorted; a stable sort by count (descending) keeps ties alphabetical
    let mut categories: Vec<_> = inventory
        .categories()
        .into_iter()
        .map(|name| (name, counts.get(&Some(name.to_string())).copied().unwrap_or(0)))
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    for (name, count) in &categories {
        println!("{name} ({count})");
    }
    if let Some(count) = counts.get(&None) {
        println!("(uncategorized) ({count})");
    }

    Ok(())
}
