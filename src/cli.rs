//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use code_assistant::defaults::{DEFAULT_BRANCH, DEFAULT_LOG_FILE};
use code_assistant::logging;

use crate::commands;

/// Code Assistant - read, write and list files and open pull requests on GitHub
#[derive(Parser, Debug)]
#[command(name = "code-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Branch the client binds to: read from, written to, and the base of
    /// pull requests
    #[arg(
        long,
        global = true,
        value_name = "BRANCH",
        env = "CODE_ASSISTANT_BRANCH",
        default_value = DEFAULT_BRANCH
    )]
    base: String,

    /// Append-only log file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "CODE_ASSISTANT_LOG",
        default_value = DEFAULT_LOG_FILE
    )]
    log_file: PathBuf,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a file from the repository
    #[command(name = "read_file", alias = "read-file")]
    ReadFile(commands::read_file::ReadFileArgs),

    /// Write content to a file
    #[command(name = "write_file", alias = "write-file")]
    WriteFile(commands::write_file::WriteFileArgs),

    /// Create a pull request
    #[command(name = "create_pr", alias = "create-pr")]
    CreatePr(commands::create_pr::CreatePrArgs),

    /// List files in a directory
    #[command(name = "list_files", alias = "list-files")]
    ListFiles(commands::list_files::ListFilesArgs),

    /// Create a branch from the head of the base branch
    #[command(name = "create_branch", alias = "create-branch")]
    CreateBranch(commands::create_branch::CreateBranchArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if !matches!(self.command, Commands::Completions(_)) {
            self.init_logging()?;
        }

        let session = commands::Session { base: self.base };

        match self.command {
            Commands::ReadFile(args) => commands::read_file::execute(args, &session),
            Commands::WriteFile(args) => commands::write_file::execute(args, &session),
            Commands::CreatePr(args) => commands::create_pr::execute(args, &session),
            Commands::ListFiles(args) => commands::list_files::execute(args, &session),
            Commands::CreateBranch(args) => commands::create_branch::execute(args, &session),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let level = LevelFilter::from_str(&self.log_level)
            .with_context(|| format!("Invalid log level: {}", self.log_level))?;
        logging::init_file_logger(&self.log_file, level)
            .with_context(|| format!("Failed to open log file {}", self.log_file.display()))
    }
}
