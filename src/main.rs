//! # Code Assistant CLI
//!
//! This is the binary entry point for the `code-assistant` command-line tool.
//!
//! Its primary responsibilities are:
//! - Loading a `.env` file, if one exists, into the process environment.
//! - Parsing command-line arguments using `clap`.
//! - Executing the selected command and letting failures surface as a
//!   non-zero exit status with the error on standard error.
//!
//! The repository operations live in the `lib.rs` library crate; the binary
//! is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Variables already present in the environment take precedence.
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    cli.execute()
}
