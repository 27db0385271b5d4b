//! `completions` subcommand: prints a shell completion script built from the
//! clap definition of the CLI.
//!
//! ```bash
//! code-assistant completions bash > ~/.local/share/bash-completion/completions/code-assistant
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

const BIN_NAME: &str = "code-assistant";

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to write the script for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Writes the completion script for `args.shell` to stdout.
///
/// Runs before logging is set up, so it never creates the log file.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, BIN_NAME, &mut io::stdout());
    Ok(())
}
