//! # Tabular Import/Export
//!
//! Shared machinery for spreadsheet and delimited-text files: typed cells,
//! header keyword detection, row-by-row merging into an [`Inventory`], and
//! the import report with its row-level warnings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod delimited;
pub mod spreadsheet;

use std::{fmt::Write as _, path::Path};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::{
    constants::TOTAL_ROW_LABEL,
    inventory::{Inventory, Upsert},
    item::{parse_value, parse_year, parser::year_in_range, InventoryItem},
};

// =============================================================================
// Cells
// =============================================================================

/// A single cell as read from a file.
///
/// Spreadsheet cells keep their native type; delimited cells are always text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    /// Wraps raw text, treating whitespace-only text as empty.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }

    /// Whether the cell holds nothing
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Trimmed display text of the cell
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.trim().to_string(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Interprets the cell as a non-negative monetary value
    pub fn as_value(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Decimal::from_f64(*n).filter(|v| *v >= Decimal::ZERO),
            Self::Text(s) => parse_value(s),
            Self::Empty | Self::Date(_) => None,
        }
    }

    /// Interprets the cell as a purchase year.
    ///
    /// Dates yield their year; whole numbers and integer text must fall in
    /// the accepted range. Anything else is `None`.
    #[allow(clippy::cast_possible_truncation)] // fract() == 0 checked first
    pub fn as_year(&self) -> Option<i32> {
        match self {
            Self::Date(d) => Some(d.year()),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => year_in_range(*n as i64),
            Self::Number(_) | Self::Empty => None,
            Self::Text(s) => parse_year(s).or_else(|| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .ok()
                    .map(|d| d.year())
            }),
        }
    }
}

// =============================================================================
// Column Detection
// =============================================================================

/// Zero-based positions of the four item fields within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub category: usize,
    pub value: usize,
    pub year: usize,
}

impl Default for ColumnMap {
    /// Positional order: name, category, value, year
    fn default() -> Self {
        Self {
            name: 0,
            category: 1,
            value: 2,
            year: 3,
        }
    }
}

const NAME_KEYWORDS: &[&str] = &["name", "item"];
const CATEGORY_KEYWORDS: &[&str] = &["category", "type", "class"];
const VALUE_KEYWORDS: &[&str] = &["value", "price", "cost"];
const YEAR_KEYWORDS: &[&str] = &["year", "purchased", "date"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

impl ColumnMap {
    /// Maps header cells to fields by case-insensitive keyword match.
    ///
    /// Returns `None` when no cell matched, meaning the row is data. When a
    /// later cell matches the same field it wins. Fields that no cell matched
    /// keep their positional default.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Option<Self> {
        let mut name = None;
        let mut category = None;
        let mut value = None;
        let mut year = None;

        for (col, header) in headers.iter().enumerate() {
            let header = header.as_ref().to_lowercase();
            if contains_any(&header, NAME_KEYWORDS) {
                name = Some(col);
            }
            if contains_any(&header, CATEGORY_KEYWORDS) {
                category = Some(col);
            }
            if contains_any(&header, VALUE_KEYWORDS) {
                value = Some(col);
            }
            if contains_any(&header, YEAR_KEYWORDS) {
                year = Some(col);
            }
        }

        if name.is_none() && category.is_none() && value.is_none() && year.is_none() {
            return None;
        }

        let defaults = Self::default();
        Some(Self {
            name: name.unwrap_or(defaults.name),
            category: category.unwrap_or(defaults.category),
            value: value.unwrap_or(defaults.value),
            year: year.unwrap_or(defaults.year),
        })
    }
}

// =============================================================================
// Import Report
// =============================================================================

/// Outcome of an import: how many rows were merged and which were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows that added a new item
    pub inserted: usize,
    /// Rows that updated an existing item
    pub updated: usize,
    /// One message per skipped row, in file order
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Total rows imported (inserted + updated)
    pub const fn imported(&self) -> usize {
        self.inserted + self.updated
    }

    /// Whether any row was skipped
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Human-readable summary listing at most `limit` warnings.
    pub fn summary(&self, limit: usize) -> String {
        let mut out = format!("Imported {} items successfully.", self.imported());
        if self.warnings.is_empty() {
            return out;
        }

        let _ = write!(out, "\n\nWarnings ({}):", self.warnings.len());
        for warning in self.warnings.iter().take(limit) {
            let _ = write!(out, "\n{warning}");
        }
        if self.warnings.len() > limit {
            let _ = write!(
                out,
                "\n... and {} more warnings.",
                self.warnings.len() - limit
            );
        }
        out
    }
}

// =============================================================================
// Row Import
// =============================================================================

/// Merges parsed rows into an inventory, collecting warnings for bad rows.
pub(crate) struct RowImporter<'a> {
    inventory: &'a mut Inventory,
    columns: ColumnMap,
    /// Prefix for warning locations ("Row" for sheets, "Line" for text)
    location: &'static str,
    report: ImportReport,
}

impl<'a> RowImporter<'a> {
    pub(crate) fn new(inventory: &'a mut Inventory, location: &'static str) -> Self {
        Self {
            inventory,
            columns: ColumnMap::default(),
            location,
            report: ImportReport::default(),
        }
    }

    pub(crate) fn set_columns(&mut self, columns: ColumnMap) {
        self.columns = columns;
    }

    pub(crate) fn warn(&mut self, number: usize, reason: &str) {
        self.report
            .warnings
            .push(format!("{} {number} skipped: {reason}", self.location));
    }

    /// Processes one data row; `number` is its 1-based position in the file.
    pub(crate) fn process(&mut self, number: usize, cells: &[Cell]) {
        const EMPTY: &Cell = &Cell::Empty;
        let cell = |col: usize| cells.get(col).unwrap_or(EMPTY);

        let name_cell = cell(self.columns.name);
        let category_cell = cell(self.columns.category);
        let value_cell = cell(self.columns.value);
        let year_cell = cell(self.columns.year);

        if [name_cell, category_cell, value_cell, year_cell]
            .iter()
            .all(|c| c.is_blank())
        {
            return;
        }

        let name = name_cell.text();
        if name.eq_ignore_ascii_case(TOTAL_ROW_LABEL) {
            tracing::debug!(row = number, "skipping total row");
            return;
        }
        if name.is_empty() {
            self.warn(number, "Empty item name");
            return;
        }

        let Some(value) = value_cell.as_value() else {
            let raw = value_cell.text();
            self.warn(
                number,
                &format!("Invalid value '{raw}' for item '{name}'"),
            );
            return;
        };

        let year = year_cell.as_year();
        if year.is_none() && !year_cell.is_blank() {
            tracing::debug!(row = number, year = %year_cell.text(), "discarding unusable year");
        }

        let category = category_cell.text();
        match InventoryItem::new(&name, Some(&category), value, year) {
            Ok(item) => match self.inventory.upsert(item) {
                Upsert::Inserted => self.report.inserted += 1,
                Upsert::Updated => self.report.updated += 1,
            },
            Err(err) => self.warn(number, &err.to_string()),
        }
    }

    pub(crate) fn finish(self) -> ImportReport {
        self.report
    }
}

// =============================================================================
// File Dispatch
// =============================================================================

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Spreadsheet,
    Delimited,
}

impl Format {
    /// Picks a format from the file extension; `None` if unrecognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Spreadsheet),
            "csv" | "txt" => Some(Self::Delimited),
            _ => None,
        }
    }
}

/// Imports a file into the inventory, choosing the reader by extension.
///
/// Unknown extensions are tried as a spreadsheet first, then as text.
pub fn import_file(inventory: &mut Inventory, path: &Path) -> Result<ImportReport> {
    tracing::info!(path = %path.display(), "importing");

    let result = match Format::from_path(path) {
        Some(Format::Spreadsheet) => spreadsheet::import(inventory, path),
        Some(Format::Delimited) => delimited::import(inventory, path),
        None => spreadsheet::import(inventory, path).or_else(|err| {
            tracing::debug!("not a spreadsheet ({err:#}), trying delimited text");
            delimited::import(inventory, path)
        }),
    };

    result.with_context(|| format!("Failed to import {}", path.display()))
}

/// Picks the export format. Only `.xlsx` workbooks can be written; other
/// spreadsheet extensions are rejected, anything else is delimited text.
pub fn export_format(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match (ext.as_str(), Format::from_path(path)) {
        ("xlsx", _) => Ok(Format::Spreadsheet),
        (_, Some(Format::Spreadsheet)) => {
            bail!("Cannot write .{ext} files: export to .xlsx or .csv instead")
        }
        _ => Ok(Format::Delimited),
    }
}

/// Exports the inventory to a file as a workbook or delimited text.
pub fn export_file(inventory: &Inventory, path: &Path) -> Result<Format> {
    tracing::info!(path = %path.display(), items = inventory.len(), "exporting");

    let format = export_format(path)?;
    let result = match format {
        Format::Spreadsheet => spreadsheet::export(inventory, path),
        Format::Delimited => delimited::export(inventory, path, delimited::Precision::Cents),
    };
    result.with_context(|| format!("Failed to export {}", path.display()))?;

    Ok(format)
}
