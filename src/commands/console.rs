//! # Console Command
//!
//! Runs the line-oriented entry session on stdin/stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{
    config::GlobalConfig,
    console::{self, ConsoleOptions},
    constants::DEFAULT_CURRENCY_SYMBOL,
};

/// Arguments for the console command
#[derive(Debug, Clone, Default)]
pub struct ConsoleArgs {
    /// Directory for the save file (overrides `console_save_dir`)
    pub save_dir: Option<PathBuf>,
}

/// Resolves the save directory: flag, then global config, then cwd.
pub fn resolve_save_dir(args: &ConsoleArgs, global: &GlobalConfig) -> Result<PathBuf> {
    if let Some(dir) = args.save_dir.clone().or_else(|| global.console_save_dir.clone()) {
        return Ok(dir);
    }
    std::env::current_dir().context("Cannot get current directory")
}

/// Executes the console command.
///
/// Works outside a project; only the global config is consulted.
pub fn execute(args: &ConsoleArgs) -> Result<()> {
    let global = GlobalConfig::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable global config: {err:#}");
        GlobalConfig::default()
    });

    let options = ConsoleOptions {
        save_dir: resolve_save_dir(args, &global)?,
        currency_symbol: if global.currency_symbol.is_empty() {
            DEFAULT_CURRENCY_SYMBOL.to_string()
        } else {
            global.currency_symbol.clone()
        },
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(stdin.lock(), &mut stdout, &options)?;
    stdout.flush()?;

    Ok(())
}
