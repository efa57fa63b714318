//! # Commands
//!
//! CLI command implementations for homeinv.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod categories;
pub mod completions;
pub mod console;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod report;
pub mod total;
pub mod update;

pub use self::{
    add::{execute as add, AddArgs},
    categories::execute as categories,
    completions::execute as completions,
    console::{execute as console, ConsoleArgs},
    export::execute as export,
    import::execute as import,
    init::execute as init,
    list::{execute as list, ListFilter, SortBy},
    remove::execute as remove,
    report::{execute as report, ReportArgs},
    total::execute as total,
    update::{execute as update, UpdateArgs},
};
