//! # homeinv CLI
//!
//! Command-line interface for the homeinv home inventory tracker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homeinv::commands::{self, AddArgs, ConsoleArgs, ListFilter, ReportArgs, SortBy, UpdateArgs};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/homeinv/config   Global configuration (currency symbol, console save dir,
                             warning limit)
  .homeinv                   Project configuration (working file, currency override)

File Formats:
  .xlsx .xlsm .xlsb .xls .ods   Spreadsheet (first worksheet is read)
  .csv .txt                     Comma-separated text
  Header cells are matched by keyword (name/item, category/type/class,
  value/price/cost, year/purchased/date). Without a header, columns are
  read in the order: name, category, value, year.

Getting Started:
  homeinv init                          Initialize project in current directory
  homeinv add \"Sofa\" --value 450        Add an item
  homeinv import household.xlsx         Merge a spreadsheet into the inventory
  homeinv report                        Show the highest-value category

Logging:
  RUST_LOG=homeinv=debug homeinv ...    Show per-row import decisions on stderr

Learn more:
  homeinv <COMMAND> --help              Show detailed help for a command";

#[derive(Parser)]
#[command(name = "homeinv")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Home inventory tracker with spreadsheet import/export and insurance reports")]
#[command(
    long_about = "homeinv keeps a list of the things you own, what they are worth, and when \
you bought them, so you have the numbers ready when an insurer asks.\n\n\
Items live in a plain CSV working file inside the project directory. Spreadsheets and \
CSV files can be merged in; rows that cannot be read are skipped with a warning instead \
of stopping the import. Names are unique regardless of capitalisation, so importing a \
row for 'SOFA' updates an existing 'Sofa'."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new homeinv project in the current directory
    #[command(
        long_about = "Initialize a new homeinv project in the current directory.\n\n\
Creates a .homeinv configuration file and an empty working file (inventory.csv). \
Commands run in any subdirectory find the project by walking upward.",
        after_help = "Examples:\n  \
homeinv init                     Initialize in current directory\n  \
cd ~/house && homeinv init       Initialize in a specific directory"
    )]
    Init,

    /// Add an item (updates the item if the name already exists)
    #[command(
        long_about = "Add an item to the inventory.\n\n\
The value must be a non-negative number; a leading '$' and ',' separators are \
accepted. The year, if given, must lie between 1900 and next year. If an item with \
the same name exists (ignoring case), its category, value and year are replaced.",
        after_help = "Examples:\n  \
homeinv add \"Sofa\" --value 450\n  \
homeinv add \"Drill\" --value 129.99 --category Tools --year 2019\n  \
homeinv add \"Painting\" -v \"$1,500\" -c Art"
    )]
    Add {
        /// Item name
        name: String,

        /// Monetary value
        #[arg(short, long)]
        value: String,

        /// Category
        #[arg(short, long)]
        category: Option<String>,

        /// Year purchased
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Edit an existing item
    #[command(
        long_about = "Edit fields of an existing item, found by name (ignoring case).\n\n\
Only the given fields change. Renaming keeps names unique.",
        after_help = "Examples:\n  \
homeinv update Sofa --value 400\n  \
homeinv update sofa --rename \"Corner Sofa\"\n  \
homeinv update Drill --no-category --no-year"
    )]
    Update {
        /// Name of the item to edit
        name: String,

        /// New value
        #[arg(short, long)]
        value: Option<String>,

        /// New category
        #[arg(short, long, conflicts_with = "no_category")]
        category: Option<String>,

        /// Clear the category
        #[arg(long)]
        no_category: bool,

        /// New purchase year
        #[arg(short, long, conflicts_with = "no_year")]
        year: Option<String>,

        /// Clear the purchase year
        #[arg(long)]
        no_year: bool,

        /// New name
        #[arg(long)]
        rename: Option<String>,
    },

    /// Remove an item
    #[command(after_help = "Examples:\n  \
homeinv remove Sofa\n  \
homeinv remove \"old lamp\"")]
    Remove {
        /// Name of the item to remove
        name: String,
    },

    /// List items with a total
    #[command(after_help = "Examples:\n  \
homeinv list                       List in insertion order\n  \
homeinv list --sort value          Most valuable first\n  \
homeinv list --category Tools      Only one category\n  \
homeinv list -c Uncategorized      Items without a category")]
    List {
        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value = "added")]
        sort: SortBy,
    },

    /// Print the total inventory value
    Total,

    /// Merge a spreadsheet or CSV file into the inventory
    #[command(
        long_about = "Merge a spreadsheet or CSV file into the inventory.\n\n\
The first row is treated as a header when it contains a column keyword; otherwise \
it is data. Rows with an empty name or an unreadable value are skipped and listed \
as warnings. Unreadable years are dropped without skipping the row. Exported total \
lines are ignored.",
        after_help = "Examples:\n  \
homeinv import household.xlsx\n  \
homeinv import backup.csv"
    )]
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Export the inventory to a spreadsheet or CSV file
    #[command(
        long_about = "Export the inventory with a header row and a trailing total.\n\n\
Spreadsheet extensions write a formatted workbook; any other extension writes CSV. \
Without a path, writes inventory_value<YYYYMMDD_HHMMSS>.xlsx to the current directory.",
        after_help = "Examples:\n  \
homeinv export\n  \
homeinv export insurance.xlsx\n  \
homeinv export backup.csv"
    )]
    Export {
        /// Destination file
        path: Option<PathBuf>,
    },

    /// Show the category with the highest total value
    #[command(after_help = "Examples:\n  \
homeinv report             Top category and its items\n  \
homeinv report --all       Totals for every category")]
    Report {
        /// Summarize every category
        #[arg(long)]
        all: bool,
    },

    /// List categories with item counts
    Categories,

    /// Enter items on stdin and total them
    #[command(
        long_about = "Enter item names and values one per line, then print the total.\n\n\
Type 'done' to finish. When asked, the list can be saved as \
inventory_value_<YYYYMMDD_HHMMSS>.txt. Does not touch the project inventory.",
        after_help = "Examples:\n  \
homeinv console\n  \
homeinv console --save-dir ~/Documents"
    )]
    Console {
        /// Directory for the saved file
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
homeinv completions bash > ~/.local/share/bash-completion/completions/homeinv\n  \
homeinv completions zsh > ~/.zfunc/_homeinv")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homeinv=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init(),

        Commands::Add {
            name,
            value,
            category,
            year,
        } => commands::add(&AddArgs {
            name,
            value,
            category,
            year,
        }),

        Commands::Update {
            name,
            value,
            category,
            no_category,
            year,
            no_year,
            rename,
        } => commands::update(UpdateArgs {
            name,
            value,
            category,
            clear_category: no_category,
            year,
            clear_year: no_year,
            rename,
        }),

        Commands::Remove { name } => commands::remove(&name),

        Commands::List { category, sort } => commands::list(&ListFilter { category, sort }),

        Commands::Total => commands::total(),

        Commands::Import { path } => commands::import(&path),

        Commands::Export { path } => commands::export(path),

        Commands::Report { all } => commands::report(ReportArgs { all }),

        Commands::Categories => commands::categories(),

        Commands::Console { save_dir } => commands::console(&ConsoleArgs { save_dir }),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
