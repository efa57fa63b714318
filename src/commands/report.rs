//! # Report Command
//!
//! Prints the insurance report: the category with the highest total value
//! and its items, or a breakdown of every category with `--all`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    constants::{UI_CATEGORY_TRUNCATE_LEN, UI_NAME_TRUNCATE_LEN},
    report::{self, CategorySummary},
    storage, ui,
};

/// Arguments for the report command
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportArgs {
    /// List every category instead of only the top one
    pub all: bool,
}

fn print_top(summary: &CategorySummary, symbol: &str) {
    println!("{}", "Insurance Report - Highest Value Category".bold());
    println!();
    println!("{}", format!("Category: {}", summary.category).bold());
    println!(
        "Total Value: {} | Number of Items: {} | Average Value per Item: {}",
        ui::format_money(summary.total, symbol),
        summary.count(),
        ui::format_money(summary.average(), symbol)
    );
    println!();

    println!(
        "{}",
        format!(
            "{:<name_w$}  {:>14}  {:>14}",
            "Item Name",
            "Value",
            "Year Purchased",
            name_w = UI_NAME_TRUNCATE_LEN
        )
        .dimmed()
    );
    for row in &summary.items {
        println!(
            "{:<name_w$}  {:>14}  {:>14}",
            ui::truncate(&row.name, UI_NAME_TRUNCATE_LEN),
            ui::format_money(row.value, symbol),
            row.year_display(),
            name_w = UI_NAME_TRUNCATE_LEN
        );
    }
}

fn print_all(summaries: &[CategorySummary], symbol: &str) {
    println!(
        "{}",
        format!(
            "{:<cat_w$}  {:>5}  {:>14}  {:>14}",
            "Category",
            "Items",
            "Total",
            "Average",
            cat_w = UI_CATEGORY_TRUNCATE_LEN
        )
        .dimmed()
    );
    for summary in summaries {
        println!(
            "{:<cat_w$}  {:>5}  {:>14}  {:>14}",
            ui::truncate(&summary.category, UI_CATEGORY_TRUNCATE_LEN),
            summary.count(),
            ui::format_money(summary.total, symbol),
            ui::format_money(summary.average(), symbol),
            cat_w = UI_CATEGORY_TRUNCATE_LEN
        );
    }
}

/// Executes the report command.
pub fn execute(args: ReportArgs) -> Result<()> {
    let config = Config::load()?;
    let inventory = storage::load(&config)?;
    let symbol = config.currency_symbol();

    if args.all {
        let summaries = report::summarize(&inventory);
        if summaries.is_empty() {
            println!("No inventory items to analyze. Please add items first.");
        } else {
            print_all(&summaries, symbol);
        }
        return Ok(());
    }

    match report::top_category(&inventory) {
        Some(summary) => print_top(&summary, symbol),
        None => println!("No inventory items to analyze. Please add items first."),
    }

    Ok(())
}
