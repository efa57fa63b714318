//! # Spreadsheet
//!
//! Workbook import (first worksheet, via `calamine`) and export (single
//! `Inventory` sheet with a bold total row, via `rust_xlsxwriter`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_xlsxwriter::{Color, Format, Workbook};

use super::{Cell, ColumnMap, ImportReport, RowImporter};
use crate::{
    constants::{EXPORT_HEADERS, EXPORT_MONEY_FORMAT, EXPORT_SHEET_NAME, TOTAL_ROW_LABEL},
    inventory::Inventory,
};

/// Header fill colour on export
const HEADER_BACKGROUND: u32 = 0x002C_3E50;

/// Converts a workbook cell into a typed [`Cell`].
pub fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_text(s),
        Data::Float(f) => Cell::Number(*f),
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or_else(|| Cell::Number(dt.as_f64()), |d| Cell::Date(d.date())),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
            .map_or_else(|| Cell::from_text(s), Cell::Date),
        Data::DurationIso(s) => Cell::from_text(s),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

/// Imports the first worksheet of a workbook.
///
/// The first row is a header if any of its cells matches a column keyword;
/// otherwise it is data and columns are taken positionally.
pub fn import(inventory: &mut Inventory, path: &Path) -> Result<ImportReport> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("Workbook does not contain any worksheets"))?
        .context("Failed to read first worksheet")?;

    if range.is_empty() {
        bail!("Spreadsheet is empty");
    }

    // Range coordinates start at the first used cell, not at A1
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    let mut importer = RowImporter::new(inventory, "Row");
    let headers: Vec<String> = rows
        .first()
        .map(|row| row.iter().map(Cell::text).collect())
        .unwrap_or_default();

    let skip = match ColumnMap::detect(&headers) {
        Some(columns) => {
            tracing::debug!(?columns, "header row detected");
            importer.set_columns(columns);
            1
        }
        None => 0,
    };

    for (index, cells) in rows.iter().enumerate().skip(skip) {
        importer.process(first_row + index + 1, cells);
    }

    Ok(importer.finish())
}

/// Writes the inventory to a new workbook.
pub fn export(inventory: &Inventory, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BACKGROUND));
    let money_format = Format::new().set_num_format(EXPORT_MONEY_FORMAT);
    let total_label_format = Format::new().set_bold();
    let total_money_format = Format::new().set_bold().set_num_format(EXPORT_MONEY_FORMAT);

    for (col, header) in (0u16..).zip(EXPORT_HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    let mut row: u32 = 1;
    for item in inventory {
        worksheet.write_string(row, 0, item.name())?;
        if let Some(category) = item.category() {
            worksheet.write_string(row, 1, category)?;
        }
        worksheet.write_number_with_format(row, 2, to_f64(item.value())?, &money_format)?;
        if let Some(year) = item.year_purchased() {
            worksheet.write_number(row, 3, f64::from(year))?;
        }
        row += 1;
    }

    worksheet.write_string_with_format(row, 0, TOTAL_ROW_LABEL, &total_label_format)?;
    worksheet.write_number_with_format(row, 2, to_f64(inventory.total())?, &total_money_format)?;

    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))
}

fn to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| anyhow!("Value {value} cannot be written to a spreadsheet"))
}
