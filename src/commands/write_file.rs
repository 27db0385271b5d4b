//! # Write File Command Implementation
//!
//! Commits new content for one file on the base branch, updating the file
//! when it exists and creating it otherwise.

use anyhow::Result;
use clap::Args;

use super::{value_or_prompt, Session};

/// Write content to a file
#[derive(Args, Debug)]
pub struct WriteFileArgs {
    /// Repository in format owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Path to the file
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Content to write
    #[arg(long, value_name = "TEXT")]
    pub content: Option<String>,

    /// Commit message
    #[arg(long, value_name = "MSG")]
    pub message: Option<String>,
}

/// Execute the `write_file` command.
pub fn execute(args: WriteFileArgs, session: &Session) -> Result<()> {
    let repo = value_or_prompt(args.repo, "Repository (owner/name)")?;
    let path = value_or_prompt(args.path, "File path")?;
    let content = value_or_prompt(args.content, "File content")?;
    let message = value_or_prompt(args.message, "Commit message")?;

    let client = session.connect(&repo)?;
    let written = client.write_file(&path, &content, &message)?;
    println!("{}", outcome_line(written));
    Ok(())
}

fn outcome_line(written: bool) -> &'static str {
    if written {
        "File updated"
    } else {
        "File not updated"
    }
}
