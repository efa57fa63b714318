//! # Field Parsing
//!
//! Lenient text parsing for item values and purchase years.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::str::FromStr;

use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use crate::constants::{MIN_PURCHASE_YEAR, YEAR_NOT_AVAILABLE};

/// Latest accepted purchase year (next calendar year).
pub fn max_purchase_year() -> i32 {
    Local::now().year() + 1
}

/// Returns `year` if it lies within `[1900, current year + 1]`.
pub fn year_in_range(year: i64) -> Option<i32> {
    let year = i32::try_from(year).ok()?;
    (MIN_PURCHASE_YEAR..=max_purchase_year())
        .contains(&year)
        .then_some(year)
}

/// Parses a non-negative monetary value.
///
/// Accepts an optional leading `$` and `,` thousands separators.
/// Returns `None` for empty, malformed or negative input.
pub fn parse_value(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|value| *value >= Decimal::ZERO)
}

/// Parses a purchase year from text.
///
/// Blank text, `N/A`, non-integers and out-of-range years all yield `None`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(YEAR_NOT_AVAILABLE) {
        return None;
    }

    trimmed.parse::<i64>().ok().and_then(year_in_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_plain() {
        assert_eq!(parse_value("100"), Some(Decimal::new(100, 0)));
        assert_eq!(parse_value(" 19.99 "), Some(Decimal::new(1999, 2)));
        assert_eq!(parse_value("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_value_currency_and_separators() {
        assert_eq!(parse_value("$1,250.50"), Some(Decimal::new(125_050, 2)));
        assert_eq!(parse_value("$ 75"), Some(Decimal::new(75, 0)));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("12abc"), None);
    }

    #[test]
    fn test_parse_value_rejects_negative() {
        assert_eq!(parse_value("-1"), None);
        assert_eq!(parse_value("-0.01"), None);
    }

    #[test]
    fn test_parse_year_in_range() {
        assert_eq!(parse_year("1900"), Some(1900));
        assert_eq!(parse_year(" 2015 "), Some(2015));
        let next = max_purchase_year();
        assert_eq!(parse_year(&next.to_string()), Some(next));
    }

    #[test]
    fn test_parse_year_out_of_range_is_absent() {
        assert_eq!(parse_year("1899"), None);
        let too_late = max_purchase_year() + 1;
        assert_eq!(parse_year(&too_late.to_string()), None);
    }

    #[test]
    fn test_parse_year_placeholders() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("N/A"), None);
        assert_eq!(parse_year("n/a"), None);
        assert_eq!(parse_year("2015.5"), None);
        assert_eq!(parse_year("soon"), None);
    }
}
