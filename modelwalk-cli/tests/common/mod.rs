//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - A model tree fixture written to disk
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Model tree used by most command tests.
pub const SITE_TREE: &str = r"
kind: site
children:
  blog:
    kind: folder
    children:
      first-post:
        leaf: true
      La Peña:
        leaf: true
  about:
    leaf: true
  archives:
    children:
      '2024':
        children:
          my archives: {}
";

/// Test environment with an isolated working directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as the working directory
/// - The site tree written to `site.yaml`
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the site tree file
    pub tree: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let tree = temp_path.join("site.yaml");
        std::fs::write(&tree, SITE_TREE).expect("Failed to write tree fixture");

        Self {
            temp_dir,
            temp_path,
            tree,
        }
    }

    /// Get a command builder running in the test directory.
    ///
    /// `MODELWALK_*` variables from the outer environment are cleared so
    /// configuration comes only from the test directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("modelwalk").expect("Failed to find modelwalk binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("MODELWALK_CONFIG")
            .env_remove("MODELWALK_LOG_MODE")
            .env_remove("MODELWALK_VIRTUAL_ROOT_KEY")
            .env_remove("MODELWALK_VIEW_MARKER")
            .env_remove("MODELWALK_SEGMENT_CACHE_CAPACITY")
            .env_remove("MODELWALK_PATH_CACHE_CAPACITY");
        cmd
    }

    /// A command for `subcommand` with `--tree` pointing at the site tree.
    pub fn tree_command(&self, subcommand: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand).arg("--tree").arg(&self.tree);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file in the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
