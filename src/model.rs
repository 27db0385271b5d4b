//! # Data Model
//!
//! Plain records exchanged between the remote API layer, the repository
//! client and the commands. None of them are cached: every value is produced
//! by one call and dropped once printed.
//!
//! The records that reach the terminal (`DirectoryEntry`,
//! `PullRequestResult`) derive `Serialize` so commands can print them as JSON
//! without an intermediate representation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::defaults::DEFAULT_BRANCH;
use crate::error::{Error, Result};

/// Identifies a remote repository as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::Validation {
            message: format!("repository must be in the form owner/name, got '{value}'"),
        };

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A repository together with the branch a client is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    pub repo: RepoId,
    pub branch: String,
}

impl RepositoryHandle {
    pub fn new(repo: RepoId, branch: impl Into<String>) -> Self {
        Self {
            repo,
            branch: branch.into(),
        }
    }

    /// Parses `owner/name` and binds it to `branch`.
    pub fn parse(repo: &str, branch: &str) -> Result<Self> {
        if branch.trim().is_empty() {
            return Err(Error::Validation {
                message: "branch name must not be empty".to_string(),
            });
        }
        Ok(Self::new(repo.parse()?, branch))
    }

    /// Parses `owner/name` and binds it to the default branch.
    pub fn on_default_branch(repo: &str) -> Result<Self> {
        Self::parse(repo, DEFAULT_BRANCH)
    }
}

impl fmt::Display for RepositoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repo, self.branch)
    }
}

/// A file's decoded text and the version token needed to update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub path: String,
    pub text: String,
    /// Blob sha of the stored revision.
    pub sha: String,
}

/// Kind of a directory entry as reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Maps the remote `type` field. Everything that is not a plain file
    /// (`dir`, `symlink`, `submodule`) is reported as a directory.
    pub fn from_remote(kind: &str) -> Self {
        if kind == "file" {
            EntryKind::File
        } else {
            EntryKind::Directory
        }
    }
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (0 for directories)
    pub size: u64,
}

/// Summary of a pull request right after it was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestResult {
    pub number: u64,
    pub url: String,
    pub title: String,
}

/// Raw answer to a contents lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteContents {
    File(RemoteFile),
    Directory(Vec<DirectoryEntry>),
}

/// A single file as returned by the contents endpoint, still in its
/// transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
    pub content: String,
    /// Transport encoding of `content`; `base64` for inline files, `none`
    /// when the file is too large to be returned inline.
    pub encoding: String,
}

/// A single-file commit to send to the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    pub path: String,
    /// Plain text; the transport encodes it.
    pub content: String,
    pub message: String,
    pub branch: String,
    /// Version token of the revision being replaced. `None` creates the file.
    pub sha: Option<String>,
}

/// Parameters for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
}
