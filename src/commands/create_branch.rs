//! # Create Branch Command Implementation
//!
//! Creates a new branch pointing at the current head of the base branch,
//! typically as the first step before writing files and opening a pull
//! request with `create_pr`.

use anyhow::Result;
use clap::Args;

use super::{value_or_prompt, Session};

/// Create a branch from the head of the base branch
#[derive(Args, Debug)]
pub struct CreateBranchArgs {
    /// Repository in format owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Name of the branch to create
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

/// Execute the `create_branch` command.
pub fn execute(args: CreateBranchArgs, session: &Session) -> Result<()> {
    let repo = value_or_prompt(args.repo, "Repository (owner/name)")?;
    let name = value_or_prompt(args.name, "Branch name")?;

    let client = session.connect(&repo)?;
    client.create_branch(&name)?;
    println!("Branch {name} created from {}", client.handle());
    Ok(())
}
