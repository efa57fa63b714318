//! # Insurance Report
//!
//! Groups the inventory by category and picks the category with the highest
//! total value. Summaries are derived on demand and never stored.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cmp::Ordering, collections::BTreeMap};

use rust_decimal::Decimal;

use crate::{constants::YEAR_NOT_AVAILABLE, inventory::Inventory};

/// One line of the report table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub value: Decimal,
    pub year_purchased: Option<i32>,
}

impl ReportRow {
    /// Year as displayed in the report (`N/A` when unknown)
    pub fn year_display(&self) -> String {
        self.year_purchased
            .map_or_else(|| YEAR_NOT_AVAILABLE.to_string(), |y| y.to_string())
    }
}

/// Aggregate of all items sharing a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category name (`Uncategorized` for items without one)
    pub category: String,
    /// Sum of member values
    pub total: Decimal,
    /// Members, highest value first
    pub items: Vec<ReportRow>,
}

impl CategorySummary {
    /// Number of items in the category
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Mean item value; zero for an empty group
    pub fn average(&self) -> Decimal {
        if self.items.is_empty() {
            return Decimal::ZERO;
        }
        self.total / Decimal::from(self.items.len())
    }
}

/// Orders summaries by total descending, then category name ascending.
fn by_total_then_name(a: &CategorySummary, b: &CategorySummary) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| a.category.cmp(&b.category))
}

/// Summarises every category, highest total first.
pub fn summarize(inventory: &Inventory) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, Vec<ReportRow>> = BTreeMap::new();
    for item in inventory {
        groups
            .entry(item.category_or_default())
            .or_default()
            .push(ReportRow {
                name: item.name().to_string(),
                value: item.value(),
                year_purchased: item.year_purchased(),
            });
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, mut items)| {
            // Stable sort keeps insertion order among equal values
            items.sort_by(|a, b| b.value.cmp(&a.value));
            CategorySummary {
                category: category.to_string(),
                total: items.iter().map(|row| row.value).sum(),
                items,
            }
        })
        .collect();

    summaries.sort_by(by_total_then_name);
    summaries
}

/// Returns the category with the highest total value.
///
/// Equal totals resolve to the alphabetically first category. `None` when the
/// inventory is empty.
pub fn top_category(inventory: &Inventory) -> Option<CategorySummary> {
    summarize(inventory).into_iter().next()
}
