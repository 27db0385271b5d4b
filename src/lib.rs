//! # Code Assistant Library
//!
//! This library reads, writes and lists files, creates branches and opens
//! pull requests in a single repository hosted behind the GitHub REST API.
//! It is used by the `code-assistant` command-line tool but can be embedded
//! in other programs that need the same operations.
//!
//! ## Quick Example
//!
//! ```no_run
//! use code_assistant::client::RepositoryClient;
//! use code_assistant::config::ClientConfig;
//! use code_assistant::logging::LogFacade;
//! use code_assistant::model::RepositoryHandle;
//!
//! let handle = RepositoryHandle::on_default_branch("octo/demo")?;
//! let config = ClientConfig::from_env()?;
//! let client = RepositoryClient::connect(handle, &config, Box::new(LogFacade))?;
//!
//! let readme = client.read_file("README.md")?;
//! client.write_file("README.md", &format!("{readme}\nMore text.\n"), "Extend README")?;
//! # Ok::<(), code_assistant::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Client (`client`)**: `RepositoryClient`, bound to one repository and
//!   branch, exposing the user-level operations and logging their outcome.
//! - **Remote seam (`remote`, `github`)**: the `RemoteApi` trait and its
//!   GitHub implementation over blocking HTTPS.
//! - **Data model (`model`)**: repository handles, file contents, directory
//!   entries and pull request summaries.
//! - **Errors (`error`)**: a typed taxonomy callers can match on.
//! - **Logging (`logging`)**: the injected `EventLog` capability and the file
//!   logger used by the binary.

pub mod client;
pub mod config;
pub mod defaults;
pub mod encoding;
pub mod error;
pub mod github;
pub mod logging;
pub mod model;
pub mod remote;

#[cfg(test)]
mod model_proptest;
