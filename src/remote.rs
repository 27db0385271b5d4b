//! # Remote API Seam
//!
//! The `RemoteApi` trait lists the raw calls the repository client makes
//! against the hosting service. It is deliberately small: one method per
//! endpoint, no logging and no fallbacks. Decisions such as "create the file
//! when it does not exist yet" live in `RepositoryClient`, which sequences
//! these calls.
//!
//! `GitHubApi` is the implementation used by the command-line tool. Tests
//! replace it with in-memory doubles so the client logic can be exercised
//! without network access.
//!
//! Every method takes the branch or reference explicitly; implementations
//! never fall back to the repository's default branch.

use crate::error::Result;
use crate::model::{FileWrite, NewPullRequest, PullRequestResult, RemoteContents, RepoId};

/// Trait for remote repository operations - allows mocking in tests
pub trait RemoteApi: Send + Sync {
    /// Confirms the repository exists and the credential can see it.
    fn get_repository(&self, repo: &RepoId) -> Result<()>;

    /// Looks up a file or directory at `path` (empty for the root) as of
    /// `reference`.
    fn get_contents(&self, repo: &RepoId, path: &str, reference: &str) -> Result<RemoteContents>;

    /// Creates or updates a single file in one commit and returns the new
    /// version token.
    ///
    /// Implementations report a stale or unexpected token as
    /// `Error::WriteConflict`.
    fn put_file(&self, repo: &RepoId, write: &FileWrite) -> Result<String>;

    /// Returns the commit sha a branch currently points at.
    fn get_branch_head(&self, repo: &RepoId, branch: &str) -> Result<String>;

    /// Creates `refs/heads/<branch>` at `sha`.
    ///
    /// Implementations report an existing branch as `Error::Conflict`.
    fn create_branch_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<()>;

    /// Opens a pull request.
    fn create_pull(&self, repo: &RepoId, request: &NewPullRequest) -> Result<PullRequestResult>;
}
