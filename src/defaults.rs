//! Default values for code-assistant configuration.
//!
//! This module provides centralized default values used across the client
//! and the commands, ensuring consistency and avoiding duplication.

/// Branch a client binds to when none is given.
pub const DEFAULT_BRANCH: &str = "main";

/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Log file written by the command-line tool.
///
/// This can be overridden by the `--log-file` CLI flag or the
/// `CODE_ASSISTANT_LOG` environment variable.
pub const DEFAULT_LOG_FILE: &str = "code_assistant.log";

/// Text appended to every commit message, followed by a UTC timestamp.
pub const COMMIT_SUFFIX: &str = "Automated commit by CodeAssistant at";

/// `User-Agent` sent with every API request. GitHub rejects requests without one.
pub fn user_agent() -> String {
    format!("code-assistant/{}", env!("CARGO_PKG_VERSION"))
}
