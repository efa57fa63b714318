//! # Test Harness
//!
//! Provides utilities for integration testing homeinv without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use homeinv::{set_home_override, storage, Inventory};

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/homeinv/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    /// Changes to the project directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        // Save original cwd
        let original_cwd = env::current_dir().expect("Failed to get current dir");

        // Set up test environment using thread-local (NOT env vars)
        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("homeinv")
            .join("config")
    }

    /// Returns the path where project config would be stored.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.path().join(".homeinv")
    }

    /// Returns the path to the default working file.
    pub fn data_path(&self) -> PathBuf {
        self.project_dir.path().join("inventory.csv")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a project config file with the given content.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Writes a file into the project directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.project_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Reads the working file content.
    pub fn read_data_file(&self) -> String {
        fs::read_to_string(self.data_path()).unwrap_or_default()
    }

    /// Loads the working file as an inventory.
    pub fn load_inventory(&self) -> Inventory {
        storage::load_from(&self.data_path()).expect("Failed to load inventory")
    }

    /// Creates a homeinv command configured to run in the test environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("homeinv").unwrap();
        cmd.current_dir(self.project_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates a fully initialized test environment with default global config.
pub fn setup_test_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().build());
    homeinv::commands::init().expect("init should succeed");
    env
}

/// Creates an initialized test environment whose working file holds `csv`.
pub fn setup_with_items(csv: &str) -> TestEnv {
    let env = setup_test_env();
    fs::write(env.data_path(), csv).expect("Failed to write working file");
    env
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Helper to build TOML config lines from optional values.
struct ConfigLines(Vec<String>);

impl ConfigLines {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = \"{v}\""));
        }
    }

    fn add_int(&mut self, key: &str, value: Option<usize>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn build(self) -> String {
        self.0.join("\n")
    }
}

/// Builder for creating test configurations.
pub struct GlobalConfigBuilder {
    currency_symbol: Option<String>,
    console_save_dir: Option<String>,
    warning_limit: Option<usize>,
}

impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self {
            currency_symbol: Some("$".to_string()),
            console_save_dir: None,
            warning_limit: None,
        }
    }
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    pub fn console_save_dir(mut self, dir: impl Into<String>) -> Self {
        self.console_save_dir = Some(dir.into());
        self
    }

    pub fn warning_limit(mut self, limit: usize) -> Self {
        self.warning_limit = Some(limit);
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("currency_symbol", self.currency_symbol.as_deref());
        lines.add_string("console_save_dir", self.console_save_dir.as_deref());
        lines.add_int("warning_limit", self.warning_limit);
        lines.build()
    }
}

/// Builder for creating project configurations.
///
/// All fields are optional - project config values override global config.
#[derive(Default)]
pub struct ProjectConfigBuilder {
    data_file: Option<String>,
    currency_symbol: Option<String>,
}

impl ProjectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_file(mut self, file: impl Into<String>) -> Self {
        self.data_file = Some(file.into());
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("data_file", self.data_file.as_deref());
        lines.add_string("currency_symbol", self.currency_symbol.as_deref());
        lines.build()
    }
}

// =============================================================================
// Workbook Fixtures
// =============================================================================

/// A cell written into a fixture workbook
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    Text(&'static str),
    Number(f64),
    Blank,
}

/// Writes rows into the first worksheet of a new workbook in the project directory.
pub fn write_workbook(env: &TestEnv, name: &str, rows: &[&[Fixture]]) -> PathBuf {
    let path = env.project_path().join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (row, cells) in rows.iter().enumerate() {
        let row = u32::try_from(row).expect("row index");
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).expect("column index");
            match cell {
                Fixture::Text(s) => {
                    sheet.write_string(row, col, *s).expect("write string");
                }
                Fixture::Number(n) => {
                    sheet.write_number(row, col, *n).expect("write number");
                }
                Fixture::Blank => {}
            }
        }
    }

    workbook.save(&path).expect("Failed to save workbook");
    path
}
