//! # List Files Command Implementation
//!
//! Prints the immediate children of a directory on the base branch as a JSON
//! array of `{name, path, type, size}` records, in the order the remote
//! returns them. The path is optional and defaults to the repository root;
//! it is never prompted for.

use anyhow::Result;
use clap::Args;

use super::{print_json, value_or_prompt, Session};

/// List files in a directory
#[derive(Args, Debug)]
pub struct ListFilesArgs {
    /// Repository in format owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Directory path (optional, defaults to the repository root)
    #[arg(long, value_name = "PATH", default_value = "")]
    pub path: String,
}

/// Execute the `list_files` command.
pub fn execute(args: ListFilesArgs, session: &Session) -> Result<()> {
    let repo = value_or_prompt(args.repo, "Repository (owner/name)")?;

    let client = session.connect(&repo)?;
    let entries = client.list_files(&args.path)?;
    print_json(&entries)
}
