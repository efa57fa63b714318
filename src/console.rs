//! # Console Session
//!
//! Line-oriented entry mode: reads item names and values from a reader,
//! prints the running total, and optionally saves the list to a timestamped
//! text file. Entries are kept as typed, without name merging.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt::Write as _,
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use crate::{
    constants::{CONSOLE_DONE_KEYWORD, EXPORT_FILE_PREFIX, TOTAL_ROW_LABEL},
    item::{format_amount, parse_value},
    ui::format_money,
};

const NAME_PROMPT: &str = "Enter item name (or 'done' to finish):";
const INVALID_VALUE: &str = "Invalid value. Please enter a non-negative number.";
const SAVE_PROMPT: &str = "Save to file? (y/n):";

/// A name/value pair typed during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub name: String,
    pub value: Decimal,
}

/// Result of a finished session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleSession {
    pub entries: Vec<ConsoleEntry>,
    /// File written when the user chose to save
    pub saved_to: Option<PathBuf>,
}

impl ConsoleSession {
    /// Sum of all entered values
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.value).sum()
    }
}

/// Options for a console session
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Directory that receives the save file
    pub save_dir: PathBuf,
    /// Symbol used when printing the total
    pub currency_symbol: String,
}

/// Runs an interactive session over `input`, writing prompts to `output`.
///
/// End of input behaves like `done` at the name prompt and `n` at the save
/// prompt.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<ConsoleSession> {
    let mut session = ConsoleSession::default();

    'entry: loop {
        let Some(name) = prompt(&mut input, output, NAME_PROMPT)? else {
            break;
        };
        if name.eq_ignore_ascii_case(CONSOLE_DONE_KEYWORD) {
            break;
        }
        if name.is_empty() {
            continue;
        }

        let value = loop {
            let Some(raw) = prompt(&mut input, output, &format!("Enter value for {name}:"))? else {
                break 'entry;
            };
            match parse_value(&raw) {
                Some(value) => break value,
                None => writeln!(output, "{INVALID_VALUE}")?,
            }
        };

        tracing::debug!(%name, %value, "console entry");
        session.entries.push(ConsoleEntry { name, value });
    }

    writeln!(
        output,
        "Total inventory value: {}",
        format_money(session.total(), &options.currency_symbol)
    )?;

    let answer = prompt(&mut input, output, SAVE_PROMPT)?.unwrap_or_default();
    if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
        let path = options
            .save_dir
            .join(save_file_name(Local::now().naive_local()));
        save(&session.entries, &path)?;
        writeln!(output, "Inventory saved to {}", path.display())?;
        session.saved_to = Some(path);
    }

    Ok(session)
}

/// Prints `message`, then reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    writeln!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// File name for a session saved at `now`: `inventory_value_<YYYYMMDD_HHMMSS>.txt`
pub fn save_file_name(now: NaiveDateTime) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Renders entries as `name,value` lines followed by `Total,<sum>`.
pub fn render(entries: &[ConsoleEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{},{}", entry.name, format_amount(entry.value));
    }
    let total: Decimal = entries.iter().map(|e| e.value).sum();
    let _ = writeln!(out, "{TOTAL_ROW_LABEL},{}", format_amount(total));
    out
}

fn save(entries: &[ConsoleEntry], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, render(entries))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;

    fn options(dir: &Path) -> ConsoleOptions {
        ConsoleOptions {
            save_dir: dir.to_path_buf(),
            currency_symbol: "$".to_string(),
        }
    }

    fn run_with(input: &str, dir: &Path) -> (ConsoleSession, String) {
        let mut output = Vec::new();
        let session = run(Cursor::new(input), &mut output, &options(dir)).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_totals_and_stops_at_done() {
        let dir = tempfile::tempdir().unwrap();
        let (session, output) = run_with("Lamp\n40\nSofa\n1200.5\nDONE\nn\n", dir.path());

        assert_eq!(session.entries.len(), 2);
        assert_eq!(session.total(), Decimal::new(12405, 1));
        assert!(output.contains("Enter value for Lamp:"));
        assert!(output.contains("Total inventory value: $1,240.50"));
        assert!(session.saved_to.is_none());
    }

    #[test]
    fn test_invalid_value_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let (session, output) = run_with("Lamp\nabc\n-3\n25\ndone\nn\n", dir.path());

        assert_eq!(output.matches(INVALID_VALUE).count(), 2);
        assert_eq!(output.matches("Enter value for Lamp:").count(), 3);
        assert_eq!(session.entries[0].value, Decimal::new(25, 0));
    }

    #[test]
    fn test_blank_name_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let (session, output) = run_with("\n  \nLamp\n5\ndone\nn\n", dir.path());

        assert_eq!(output.matches(NAME_PROMPT).count(), 4);
        assert_eq!(session.entries.len(), 1);
    }

    #[test]
    fn test_repeated_names_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = run_with("Cup\n2\ncup\n3\ndone\nn\n", dir.path());
        assert_eq!(session.entries.len(), 2);
        assert_eq!(session.total(), Decimal::new(5, 0));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let (session, output) = run_with("Lamp\n40\nRug\n9.5\ndone\ny\n", dir.path());

        let path = session.saved_to.unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(output.contains("Inventory saved to"));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("inventory_value_"));
        assert!(name.ends_with(".txt"));

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Lamp,40.00\nRug,9.50\nTotal,49.50\n");
    }

    #[test]
    fn test_end_of_input_finishes_session() {
        let dir = tempfile::tempdir().unwrap();
        let (session, output) = run_with("Lamp\n", dir.path());

        assert!(session.entries.is_empty());
        assert!(session.saved_to.is_none());
        assert!(output.contains("Total inventory value: $0.00"));
    }

    #[test]
    fn test_save_file_name() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(save_file_name(at), "inventory_value_20250307_090501.txt");
    }
}
