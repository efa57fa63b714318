//! # Item
//!
//! A single inventory record: name, category, monetary value and purchase year.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod parser;

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

pub use self::parser::{max_purchase_year, parse_value, parse_year};
use crate::constants::{MIN_PURCHASE_YEAR, TOTAL_ROW_LABEL, UNCATEGORIZED};

/// Validation failures for manually entered items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Invalid value '{0}': enter a non-negative number")]
    InvalidValue(String),

    #[error("Invalid year '{0}': enter a numeric year")]
    InvalidYear(String),

    #[error("Year {year} is out of range: enter a year between {min} and {max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("'{0}' is reserved for the total line")]
    ReservedName(String),

    #[error("An item named '{0}' already exists")]
    DuplicateName(String),

    #[error("No item named '{0}'")]
    NotFound(String),
}

/// An inventory record, keyed by case-insensitive name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    name: String,
    category: Option<String>,
    value: Decimal,
    year_purchased: Option<i32>,
}

impl InventoryItem {
    /// Creates an item, trimming the name and normalising a blank category to `None`.
    ///
    /// The year is stored as given; callers decide whether an out-of-range
    /// year is an error (manual entry) or silently dropped (import).
    pub fn new(
        name: &str,
        category: Option<&str>,
        value: Decimal,
        year_purchased: Option<i32>,
    ) -> Result<Self, ItemError> {
        let name = validate_name(name)?;
        if value < Decimal::ZERO {
            return Err(ItemError::InvalidValue(value.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            category: normalize_category(category),
            value,
            year_purchased,
        })
    }

    /// Builds an item from raw text the way the add form validates it:
    /// value must parse, and a supplied year must be numeric and in range.
    pub fn from_input(
        name: &str,
        category: Option<&str>,
        value: &str,
        year: Option<&str>,
    ) -> Result<Self, ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }

        let value = parse_value(value).ok_or_else(|| ItemError::InvalidValue(value.to_string()))?;

        let year = match year.map(str::trim).filter(|y| !y.is_empty()) {
            Some(raw) => Some(validate_year_strict(raw)?),
            None => None,
        };

        Self::new(name, category, value, year)
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the category, or the uncategorized bucket name
    pub fn category_or_default(&self) -> &str {
        self.category().unwrap_or(UNCATEGORIZED)
    }

    /// Returns the value
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the purchase year
    pub const fn year_purchased(&self) -> Option<i32> {
        self.year_purchased
    }

    /// Whether this item's name matches `name`, ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }

    /// Sets the name
    pub fn set_name(&mut self, name: &str) -> Result<(), ItemError> {
        let name = validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Sets the category
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize_category(category);
    }

    /// Sets the value
    pub fn set_value(&mut self, value: Decimal) -> Result<(), ItemError> {
        if value < Decimal::ZERO {
            return Err(ItemError::InvalidValue(value.to_string()));
        }
        self.value = value;
        Ok(())
    }

    /// Sets the purchase year
    pub fn set_year_purchased(&mut self, year: Option<i32>) {
        self.year_purchased = year;
    }

    /// Copies category, value and year from `other`, keeping this item's name.
    pub(crate) fn merge_from(&mut self, other: Self) {
        self.category = other.category;
        self.value = other.value;
        self.year_purchased = other.year_purchased;
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, format_amount(self.value))
    }
}

/// Formats a value with exactly two decimal places, rounding half away from zero.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Trims a name and rejects blanks and the total line label.
fn validate_name(name: &str) -> Result<&str, ItemError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItemError::EmptyName);
    }
    if name.eq_ignore_ascii_case(TOTAL_ROW_LABEL) {
        return Err(ItemError::ReservedName(name.to_string()));
    }
    Ok(name)
}

/// Case-insensitive name comparison used for upsert matching
pub fn names_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parses a manually entered year, rejecting non-numeric or out-of-range input.
pub fn validate_year_strict(raw: &str) -> Result<i32, ItemError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ItemError::InvalidYear(raw.to_string()))?;

    let max = max_purchase_year();
    if (MIN_PURCHASE_YEAR..=max).contains(&year) {
        Ok(year)
    } else {
        Err(ItemError::YearOutOfRange {
            year,
            min: MIN_PURCHASE_YEAR,
            max,
        })
    }
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
}
