//! # Create Pull Request Command Implementation
//!
//! Opens a pull request from `--branch` into the base branch and prints the
//! new pull request's number, URL and title as JSON.

use anyhow::Result;
use clap::Args;

use super::{print_json, value_or_prompt, Session};

/// Create a pull request
#[derive(Args, Debug)]
pub struct CreatePrArgs {
    /// Repository in format owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Pull request title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Pull request body
    #[arg(long, value_name = "BODY")]
    pub body: Option<String>,

    /// Branch containing the changes
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Execute the `create_pr` command.
pub fn execute(args: CreatePrArgs, session: &Session) -> Result<()> {
    let repo = value_or_prompt(args.repo, "Repository (owner/name)")?;
    let title = value_or_prompt(args.title, "PR title")?;
    let body = value_or_prompt(args.body, "PR body")?;
    let branch = value_or_prompt(args.branch, "Branch name")?;

    let client = session.connect(&repo)?;
    let pr = client.create_pull_request(&title, &body, &branch)?;
    print_json(&pr)
}
