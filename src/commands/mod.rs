//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `code-assistant` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific options, derived
//!   using `clap`. Required values are `Option`s: anything not given as a flag
//!   is prompted for interactively.
//! - An `execute` function that collects the parameters, connects a
//!   `RepositoryClient`, invokes exactly one client operation and prints the
//!   result.
//!
//! Failures are returned as `anyhow::Error` and end the process with a
//! non-zero status.

pub mod completions;
pub mod create_branch;
pub mod create_pr;
pub mod list_files;
pub mod read_file;
pub mod write_file;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::Serialize;

use code_assistant::client::RepositoryClient;
use code_assistant::logging::LogFacade;

/// Settings shared by every repository command.
#[derive(Debug, Clone)]
pub struct Session {
    /// Branch the client binds to.
    pub base: String,
}

impl Session {
    /// Builds a client for `repo` at the session's base branch.
    pub fn connect(&self, repo: &str) -> Result<RepositoryClient> {
        Ok(RepositoryClient::from_env(
            repo,
            &self.base,
            Box::new(LogFacade),
        )?)
    }
}

/// Returns `value` if it was given as a flag, otherwise asks for it.
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(input)
        }
    }
}

/// Pretty-prints a value as JSON on standard output.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
