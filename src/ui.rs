//! # UI Utilities
//!
//! Shared terminal output helpers: money formatting, table cells, success
//! and warning messages, and aggregation used across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, hash::Hash};

use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::{
    config::Config,
    constants::{UI_CATEGORY_TRUNCATE_LEN, UI_NAME_TRUNCATE_LEN},
    item::{format_amount, InventoryItem},
};

// =============================================================================
// Aggregation Utilities
// =============================================================================

/// Counts occurrences by a single key extracted from each item.
///
/// For items that map to exactly one key (e.g., category).
pub fn count_by<'a, T, K, I, F>(items: I, key_fn: F) -> HashMap<K, usize>
where
    T: 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Money Formatting
// =============================================================================

/// Formats a value as currency: symbol, thousands separators, two decimals.
///
/// `format_money(Decimal::new(123456, 2), "$")` gives `$1,234.56`.
pub fn format_money(value: Decimal, symbol: &str) -> String {
    let amount = format_amount(value.abs());
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{fraction}")
}

// =============================================================================
// Item Display
// =============================================================================

/// Formats one item as a fixed-width table line: Name | Category | Value | Year
pub fn item_row(item: &InventoryItem, symbol: &str) -> String {
    let year = item
        .year_purchased()
        .map(|y| y.to_string())
        .unwrap_or_default();
    format!(
        "{:<name_w$}  {:<cat_w$}  {:>14}  {:>4}",
        truncate(item.name(), UI_NAME_TRUNCATE_LEN),
        truncate(item.category().unwrap_or("-"), UI_CATEGORY_TRUNCATE_LEN),
        format_money(item.value(), symbol),
        year,
        name_w = UI_NAME_TRUNCATE_LEN,
        cat_w = UI_CATEGORY_TRUNCATE_LEN,
    )
}

// =============================================================================
// Success Messages
// =============================================================================

/// Prints a success message for an item.
///
/// Format: `✓ {verb} item: {name} ({value})`
pub fn print_success(verb: &str, config: &Config, item: &InventoryItem) {
    println!(
        "{} {} item: {} ({})",
        "✓".green(),
        verb,
        item.name(),
        format_money(item.value(), config.currency_symbol())
    );
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the specified maximum length, adding ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
