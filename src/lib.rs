//! # homeinv
//!
//! A home inventory tracker for insurance records.
//!
//! Items (name, category, value, purchase year) live in a plain CSV working
//! file inside a project directory, so they stay readable and easy to back up.
//!
//! ## Features
//!
//! - **Import**: Merge spreadsheets (`.xlsx`, `.xls`, `.ods`) or CSV files, with
//!   header detection and per-row warnings
//! - **Export**: Write a formatted workbook or CSV with a total line
//! - **Insurance Report**: Find the category with the highest total value
//! - **Console Mode**: Quick stdin entry with an optional saved summary
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod console;
pub mod constants;
pub mod inventory;
pub mod item;
pub mod report;
pub mod storage;
pub mod tabular;
pub mod ui;

pub use config::{set_home_override, Config};
pub use inventory::{Inventory, Upsert};
pub use item::{InventoryItem, ItemError};
pub use tabular::ImportReport;
