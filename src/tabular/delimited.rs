//! # Delimited Text
//!
//! Comma-separated import and export. Import uses a minimal quote-toggling
//! line splitter; export goes through the `csv` writer so that names with
//! commas come back intact.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use super::{Cell, ColumnMap, ImportReport, RowImporter};
use crate::{
    constants::{EXPORT_HEADERS, TOTAL_ROW_LABEL},
    inventory::Inventory,
    item::format_amount,
};

/// Keywords marking the first line as a header
const HEADER_KEYWORDS: &[&str] = &["name", "item", "category", "value", "year", "total"];

/// Splits one line into fields.
///
/// A `"` toggles quoting and is dropped, except that `""` inside quotes is a
/// literal quote. A `,` outside quotes ends the field. The last field is
/// emitted at end of line, so `a,b,` yields three fields.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Whether a line looks like a column header
pub fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Whether a line is an exported total line (`Total,...`)
pub fn is_total_line(line: &str) -> bool {
    line.trim_start()
        .get(..TOTAL_ROW_LABEL.len() + 1)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("total,"))
}

/// Imports delimited text already read into memory.
pub fn import_str(inventory: &mut Inventory, content: &str) -> ImportReport {
    let content = content.trim_start_matches('\u{feff}');
    let mut importer = RowImporter::new(inventory, "Line");
    let mut first_line = true;

    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        if first_line {
            first_line = false;
            if is_header_line(line) {
                let columns = ColumnMap::detect(&split_line(line)).unwrap_or_default();
                tracing::debug!(?columns, "header line detected");
                importer.set_columns(columns);
                continue;
            }
        }

        if is_total_line(line) {
            tracing::debug!(line = number, "skipping total line");
            continue;
        }

        let fields = split_line(line);
        if fields.len() < 3 {
            importer.warn(number, &format!("Invalid format - '{line}'"));
            continue;
        }

        let cells: Vec<Cell> = fields.iter().map(|f| Cell::from_text(f)).collect();
        importer.process(number, &cells);
    }

    importer.finish()
}

/// Imports a delimited text file.
pub fn import(inventory: &mut Inventory, path: &Path) -> Result<ImportReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(import_str(inventory, &content))
}

/// How values are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Rounded to two decimals, for exported files
    Cents,
    /// As stored, padded to at least two decimals, for the working file
    Full,
}

impl Precision {
    fn render(self, value: Decimal) -> String {
        match self {
            Self::Full if value.scale() > 2 => value.to_string(),
            _ => format_amount(value),
        }
    }
}

/// Writes the header, one line per item, and a trailing total line.
pub fn write<W: io::Write>(inventory: &Inventory, writer: W, precision: Precision) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(EXPORT_HEADERS)?;

    for item in inventory {
        let value = precision.render(item.value());
        let year = item
            .year_purchased()
            .map(|y| y.to_string())
            .unwrap_or_default();
        csv.write_record([
            item.name(),
            item.category().unwrap_or_default(),
            value.as_str(),
            year.as_str(),
        ])?;
    }

    let total = precision.render(inventory.total());
    csv.write_record([TOTAL_ROW_LABEL, "", total.as_str(), ""])?;
    csv.flush()?;
    Ok(())
}

/// Writes the inventory to a delimited text file.
pub fn export(inventory: &Inventory, path: &Path, precision: Precision) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    write(inventory, io::BufWriter::new(file), precision)
}

/// Renders the inventory as delimited text.
pub fn to_string(inventory: &Inventory, precision: Precision) -> Result<String> {
    let mut buf = Vec::new();
    write(inventory, &mut buf, precision)?;
    String::from_utf8(buf).context("Exported text is not valid UTF-8")
}
