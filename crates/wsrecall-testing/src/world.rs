//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Registering editor app-data directories in a config file
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::AppDataFixture;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use wsrecall_testing::TestWorld;
///
/// let mut world = TestWorld::new();
/// let code = world.add_editor("Code").unwrap();
/// code.write_legacy_history(&["file:///home/me/app"], &[]).unwrap();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    editors: Vec<(String, PathBuf)>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("wsrecall").join("config.toml");

        Self {
            temp_dir,
            config_path,
            editors: Vec::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory that plays the role of the platform config dir.
    pub fn editors_root(&self) -> PathBuf {
        self.temp_dir.path().join("editors")
    }

    /// Create an editor app-data directory and list it in the config file.
    pub fn add_editor(&mut self, name: &str) -> Result<AppDataFixture> {
        let fixture = AppDataFixture::create(&self.editors_root(), name)?;
        self.editors.push((name.to_string(), fixture.root().to_path_buf()));
        self.write_config()?;
        Ok(fixture)
    }

    fn write_config(&self) -> Result<()> {
        let mut content = String::new();
        for (name, app_data) in &self.editors {
            // literal strings: no escaping of Windows separators
            writeln!(content, "[[instances]]")?;
            writeln!(content, "name = '{}'", name)?;
            writeln!(content, "app_data = '{}'", app_data.display())?;
            writeln!(content)?;
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("wsrecall")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("WSRECALL_CONFIG");
        cmd
    }
}
