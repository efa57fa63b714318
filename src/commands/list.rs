//! # List Command
//!
//! Lists inventory items as a table with a total line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cmp::Reverse;

use anyhow::Result;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::{config::Config, item::InventoryItem, storage, ui};

/// Sort order for listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortBy {
    /// Insertion order
    #[default]
    Added,
    /// Alphabetically by name
    Name,
    /// Highest value first
    Value,
    /// Oldest purchase first, unknown years last
    Year,
}

/// Filter options for listing
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub sort: SortBy,
}

/// Sorts items in place by the given sort order.
pub fn sort_items(items: &mut [&InventoryItem], sort: SortBy) {
    match sort {
        SortBy::Added => {}
        SortBy::Name => items.sort_by_key(|item| item.name().to_lowercase()),
        SortBy::Value => items.sort_by_key(|item| Reverse(item.value())),
        SortBy::Year => {
            items.sort_by_key(|item| (item.year_purchased().is_none(), item.year_purchased()));
        }
    }
}

fn matches_category(item: &InventoryItem, category: &str) -> bool {
    item.category_or_default().eq_ignore_ascii_case(category.trim())
}

/// Executes the list command.
pub fn execute(filter: &ListFilter) -> Result<()> {
    let config = Config::load()?;
    let inventory = storage::load(&config)?;

    let mut items: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|item| {
            filter
                .category
                .as_deref()
                .map_or(true, |category| matches_category(item, category))
        })
        .collect();

    if items.is_empty() {
        println!("{}", "No items found.".dimmed());
        return Ok(());
    }

    sort_items(&mut items, filter.sort);

    let symbol = config.currency_symbol();
    for item in &items {
        println!("{}", ui::item_row(item, symbol));
    }

    let total: Decimal = items.iter().map(|item| item.value()).sum();
    println!(
        "\n{} {} ({} items)",
        "Total:".bold(),
        ui::format_money(total, symbol),
        items.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, value: i64, year: Option<i32>) -> InventoryItem {
        InventoryItem::new(name, None, Decimal::new(value, 0), year).unwrap()
    }

    fn names(items: &[&InventoryItem]) -> Vec<String> {
        items.iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_sort_items() {
        let a = item("lamp", 40, Some(2020));
        let b = item("Bed", 300, None);
        let c = item("chair", 80, Some(2001));
        let mut items = vec![&a, &b, &c];

        sort_items(&mut items, SortBy::Name);
        assert_eq!(names(&items), ["Bed", "chair", "lamp"]);

        sort_items(&mut items, SortBy::Value);
        assert_eq!(names(&items), ["Bed", "chair", "lamp"]);

        sort_items(&mut items, SortBy::Year);
        assert_eq!(names(&items), ["chair", "lamp", "Bed"]);
    }

    #[test]
    fn test_matches_category() {
        let tools = InventoryItem::new("Saw", Some("Tools"), Decimal::ONE, None).unwrap();
        let none = item("Box", 1, None);
        assert!(matches_category(&tools, "tools"));
        assert!(!matches_category(&tools, "Kitchen"));
        assert!(matches_category(&none, "Uncategorized"));
    }
}
