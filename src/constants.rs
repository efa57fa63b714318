//! # Constants
//!
//! Centralized constants for magic values used throughout homeinv.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for item names in list display (truncated with ellipsis).
pub const UI_NAME_TRUNCATE_LEN: usize = 32;

/// Maximum length for categories in list display (truncated with ellipsis).
pub const UI_CATEGORY_TRUNCATE_LEN: usize = 20;

/// Default currency symbol for money display.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Default number of import warnings shown before truncating.
pub const DEFAULT_WARNING_LIMIT: usize = 10;

// =============================================================================
// Item Format
// =============================================================================

/// Earliest accepted purchase year.
pub const MIN_PURCHASE_YEAR: i32 = 1900;

/// Bucket name for items without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Placeholder shown in reports when the purchase year is unknown.
pub const YEAR_NOT_AVAILABLE: &str = "N/A";

/// Name cell marking an exported total line.
pub const TOTAL_ROW_LABEL: &str = "Total";

/// Column headers used on export.
pub const EXPORT_HEADERS: [&str; 4] = ["Item Name", "Category", "Value", "Year Purchased"];

/// Worksheet name used on spreadsheet export.
pub const EXPORT_SHEET_NAME: &str = "Inventory";

/// Number format applied to value cells on spreadsheet export.
pub const EXPORT_MONEY_FORMAT: &str = "$#,##0.00";

/// Filename prefix for timestamped exports and console saves.
pub const EXPORT_FILE_PREFIX: &str = "inventory_value";

// =============================================================================
// File System
// =============================================================================

/// Default working file holding the inventory between runs.
pub const DEFAULT_DATA_FILE: &str = "inventory.csv";

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = ".homeinv";

/// Global configuration directory name (inside user's config directory).
pub const GLOBAL_CONFIG_DIR: &str = "homeinv";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Console Session
// =============================================================================

/// Input that ends item entry in the console session.
pub const CONSOLE_DONE_KEYWORD: &str = "done";
