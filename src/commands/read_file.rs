//! # Read File Command Implementation
//!
//! Prints the text of one file from the base branch to standard output.

use anyhow::Result;
use clap::Args;

use super::{value_or_prompt, Session};

/// Read a file from the repository
#[derive(Args, Debug)]
pub struct ReadFileArgs {
    /// Repository in format owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Path to the file
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,
}

/// Execute the `read_file` command.
pub fn execute(args: ReadFileArgs, session: &Session) -> Result<()> {
    let repo = value_or_prompt(args.repo, "Repository (owner/name)")?;
    let path = value_or_prompt(args.path, "File path")?;

    let client = session.connect(&repo)?;
    let content = client.read_file(&path)?;
    println!("{content}");
    Ok(())
}
