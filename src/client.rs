//! # Repository Client
//!
//! `RepositoryClient` wraps one remote repository at one branch. It is the
//! only place that knows how the raw [`RemoteApi`] calls combine into user
//! operations, and the only place that logs their outcome.
//!
//! ## Design
//!
//! The client is built around two injected capabilities:
//!
//! - **`RemoteApi`**: the remote calls. `RepositoryClient::connect` uses the
//!   GitHub implementation; `RepositoryClient::open` accepts any
//!   implementation, which is how the tests below drive the client against an
//!   in-memory repository.
//! - **`EventLog`**: where outcome messages go.
//!
//! Every public operation logs exactly once: an info entry when it succeeds,
//! an error entry naming the operation, its key input and the cause when it
//! fails. The error is then returned unchanged.
//!
//! ## Writes
//!
//! `update_file` and `create_file` are the explicit write primitives.
//! `write_file` sequences them: it fetches the current version token, updates
//! with it when the file exists and creates the file only when the lookup
//! reported `Error::NotFound`. A stale token is reported by the remote as
//! `Error::WriteConflict` and returned to the caller; it never turns into a
//! create.

use chrono::{DateTime, Utc};

use crate::config::ClientConfig;
use crate::defaults::COMMIT_SUFFIX;
use crate::encoding::decode_content;
use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::logging::EventLog;
use crate::model::{
    DirectoryEntry, FileContent, FileWrite, NewPullRequest, PullRequestResult, RemoteContents,
    RemoteFile, RepositoryHandle,
};
use crate::remote::RemoteApi;

/// Appends the provenance suffix to a commit message.
pub fn commit_message(message: &str, now: DateTime<Utc>) -> String {
    format!(
        "{message}\n\n{COMMIT_SUFFIX} {}",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Client bound to a single repository and branch.
pub struct RepositoryClient {
    handle: RepositoryHandle,
    remote: Box<dyn RemoteApi>,
    log: Box<dyn EventLog>,
}

impl RepositoryClient {
    /// Parses `repo`, reads the connection settings from the environment and
    /// connects.
    ///
    /// Any failure along the way, including a malformed repository or a
    /// missing token, is logged once before it is returned.
    pub fn from_env(repo: &str, branch: &str, log: Box<dyn EventLog>) -> Result<Self> {
        let prepared = RepositoryHandle::parse(repo, branch)
            .and_then(|handle| ClientConfig::from_env().map(|config| (handle, config)));

        match prepared {
            Ok((handle, config)) => Self::connect(handle, &config, log),
            Err(e) => {
                log.error(&format!("Error connecting to repository {repo}: {e}"));
                Err(e)
            }
        }
    }

    /// Connects to the GitHub API described by `config` and binds to
    /// `handle`.
    pub fn connect(
        handle: RepositoryHandle,
        config: &ClientConfig,
        log: Box<dyn EventLog>,
    ) -> Result<Self> {
        let remote = match GitHubApi::new(config) {
            Ok(remote) => remote,
            Err(e) => {
                log.error(&format!("Error connecting to repository {}: {e}", handle.repo));
                return Err(e);
            }
        };
        Self::open(handle, Box::new(remote), log)
    }

    /// Binds to `handle` through an arbitrary remote, checking that the
    /// repository exists and is visible to the credential.
    pub fn open(
        handle: RepositoryHandle,
        remote: Box<dyn RemoteApi>,
        log: Box<dyn EventLog>,
    ) -> Result<Self> {
        remote
            .get_repository(&handle.repo)
            .inspect(|_| log.info(&format!("Connected to repository: {handle}")))
            .inspect_err(|e| {
                log.error(&format!("Error connecting to repository {}: {e}", handle.repo))
            })?;

        Ok(Self {
            handle,
            remote,
            log,
        })
    }

    pub fn handle(&self) -> &RepositoryHandle {
        &self.handle
    }

    /// The branch every operation reads from and writes to.
    pub fn branch(&self) -> &str {
        &self.handle.branch
    }

    /// Reads the file at `path` on the configured branch as text.
    pub fn read_file(&self, path: &str) -> Result<String> {
        self.fetch_decoded(path)
            .map(|file| file.text)
            .inspect(|_| self.log.info(&format!("Successfully read file: {path}")))
            .inspect_err(|e| self.log.error(&format!("Error reading file {path}: {e}")))
    }

    /// Reads the file at `path` together with its version token.
    pub fn fetch_file(&self, path: &str) -> Result<FileContent> {
        self.fetch_decoded(path)
            .inspect(|file| {
                self.log
                    .info(&format!("Fetched file: {path} (sha {})", file.sha))
            })
            .inspect_err(|e| self.log.error(&format!("Error fetching file {path}: {e}")))
    }

    /// Replaces the revision identified by `sha` and returns the new token.
    ///
    /// Fails with `Error::WriteConflict` when `sha` is no longer current.
    pub fn update_file(&self, path: &str, sha: &str, content: &str, message: &str) -> Result<String> {
        self.put(path, content, message, Some(sha))
            .inspect(|_| self.log.info(&format!("Successfully updated file: {path}")))
            .inspect_err(|e| self.log.error(&format!("Error updating file {path}: {e}")))
    }

    /// Creates a new file and returns its token.
    ///
    /// Fails with `Error::WriteConflict` when a file already exists at `path`.
    pub fn create_file(&self, path: &str, content: &str, message: &str) -> Result<String> {
        self.put(path, content, message, None)
            .inspect(|_| self.log.info(&format!("Successfully created file: {path}")))
            .inspect_err(|e| self.log.error(&format!("Error creating file {path}: {e}")))
    }

    /// Writes `content` to `path`, updating the file if it exists and
    /// creating it otherwise.
    pub fn write_file(&self, path: &str, content: &str, message: &str) -> Result<bool> {
        self.upsert(path, content, message)
            .map(|_| true)
            .inspect(|_| self.log.info(&format!("Successfully wrote to file: {path}")))
            .inspect_err(|e| self.log.error(&format!("Error writing to file {path}: {e}")))
    }

    /// Lists the immediate children of `path` (the root when empty).
    pub fn list_files(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        self.list(path)
            .inspect(|entries| {
                self.log
                    .info(&format!("Listed {} entries in '{path}'", entries.len()))
            })
            .inspect_err(|e| self.log.error(&format!("Error listing files in {path}: {e}")))
    }

    /// Creates branch `name` at the current head of the configured branch.
    pub fn create_branch(&self, name: &str) -> Result<bool> {
        self.branch_from_head(name)
            .map(|_| true)
            .inspect(|_| self.log.info(&format!("Created branch: {name}")))
            .inspect_err(|e| self.log.error(&format!("Error creating branch {name}: {e}")))
    }

    /// Opens a pull request from `head_branch` into the configured branch.
    pub fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        head_branch: &str,
    ) -> Result<PullRequestResult> {
        self.open_pull(title, body, head_branch)
            .inspect(|pr| self.log.info(&format!("Created PR #{}: {}", pr.number, pr.title)))
            .inspect_err(|e| {
                self.log
                    .error(&format!("Error creating PR from {head_branch}: {e}"))
            })
    }

    fn lookup_file(&self, path: &str) -> Result<RemoteFile> {
        match self
            .remote
            .get_contents(&self.handle.repo, path, &self.handle.branch)?
        {
            RemoteContents::File(file) => Ok(file),
            RemoteContents::Directory(_) => Err(Error::NotFound {
                resource: format!("{path}@{}", self.handle.branch),
                message: "path is a directory, not a file".to_string(),
            }),
        }
    }

    fn fetch_decoded(&self, path: &str) -> Result<FileContent> {
        let file = self.lookup_file(path)?;
        if file.encoding != "base64" {
            return Err(Error::Decode {
                path: path.to_string(),
                message: format!("content is not inline (encoding '{}')", file.encoding),
            });
        }

        let text = decode_content(path, &file.content)?;
        Ok(FileContent {
            path: file.path,
            text,
            sha: file.sha,
        })
    }

    fn put(&self, path: &str, content: &str, message: &str, sha: Option<&str>) -> Result<String> {
        let write = FileWrite {
            path: path.to_string(),
            content: content.to_string(),
            message: commit_message(message, Utc::now()),
            branch: self.handle.branch.clone(),
            sha: sha.map(str::to_string),
        };
        self.remote.put_file(&self.handle.repo, &write)
    }

    fn upsert(&self, path: &str, content: &str, message: &str) -> Result<String> {
        let existing = self
            .remote
            .get_contents(&self.handle.repo, path, &self.handle.branch);

        match existing {
            Ok(RemoteContents::File(file)) => self.put(path, content, message, Some(&file.sha)),
            Ok(RemoteContents::Directory(_)) => Err(Error::Validation {
                message: format!("cannot write to {path}: path is a directory"),
            }),
            Err(e) if e.is_not_found() => self.put(path, content, message, None),
            Err(e) => Err(e),
        }
    }

    fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        match self
            .remote
            .get_contents(&self.handle.repo, path, &self.handle.branch)?
        {
            RemoteContents::Directory(entries) => Ok(entries),
            RemoteContents::File(file) => Err(Error::NotFound {
                resource: format!("{}@{}", file.path, self.handle.branch),
                message: "path is a file, not a directory".to_string(),
            }),
        }
    }

    fn branch_from_head(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "branch name must not be empty".to_string(),
            });
        }

        let head = self
            .remote
            .get_branch_head(&self.handle.repo, &self.handle.branch)?;
        self.remote
            .create_branch_ref(&self.handle.repo, name, &head)
    }

    fn open_pull(&self, title: &str, body: &str, head_branch: &str) -> Result<PullRequestResult> {
        if head_branch.trim().is_empty() {
            return Err(Error::Validation {
                message: "head branch must not be empty".to_string(),
            });
        }
        if head_branch == self.handle.branch {
            return Err(Error::Validation {
                message: format!(
                    "head branch '{head_branch}' is the base branch; nothing to merge"
                ),
            });
        }

        let request = NewPullRequest {
            title: title.to_string(),
            body: body.to_string(),
            head: head_branch.to_string(),
            base: self.handle.branch.clone(),
        };
        self.remote.create_pull(&self.handle.repo, &request)
    }
}
