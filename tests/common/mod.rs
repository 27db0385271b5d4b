//! Shared test utilities for CLI end-to-end tests.
//!
//! The fixtures here never reach a real API: every command runs with the
//! credential and endpoint variables cleared, in a temporary working
//! directory, with the log file pointed inside that directory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("--help").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{TestFixture, UNREACHABLE_API};
}

/// An API base URL nothing listens on (port 9 is the discard service).
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Environment variables that would leak the developer's setup into tests.
const SCRUBBED_VARS: &[&str] = &[
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "CODE_ASSISTANT_BRANCH",
    "CODE_ASSISTANT_LOG",
];

/// A temporary working directory for one CLI invocation.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where commands from `command()` write their log.
    pub fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("test.log")
    }

    /// Contents of the log file, or an empty string if none was written.
    pub fn read_log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Create a command running in this fixture's directory with a clean
    /// environment and the log file inside the fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd_for_fixture();
        cmd.current_dir(self.path());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.arg("--log-file").arg(self.log_path());
        cmd
    }

    /// Like `command()`, with a token set and the API pointed at a closed
    /// port.
    pub fn command_with_unreachable_api(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.env("GITHUB_TOKEN", "ghp_test_token")
            .env("GITHUB_API_URL", UNREACHABLE_API);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn cargo_bin_cmd_for_fixture() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("code-assistant")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file(".env", "GITHUB_TOKEN=x\n");
        assert!(fixture.path().join(".env").exists());
    }

    #[test]
    fn test_read_log_without_file_is_empty() {
        let fixture = TestFixture::new();
        assert_eq!(fixture.read_log(), "");
    }
}
