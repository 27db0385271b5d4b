//! # Error Handling
//!
//! This module defines the centralized error type for `code-assistant`. It
//! uses `thiserror` to build an `Error` enum whose variants follow the kinds
//! of failure a caller may want to branch on, rather than the HTTP call that
//! produced them.
//!
//! ## Key Components
//!
//! - **`Error`**: every failure the library can report. The remote API's own
//!   explanation (the `message` field of its JSON error body) is carried in
//!   the variant so it reaches the log and the terminal unchanged.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! - **`Error::from_status`**: the generic mapping from an HTTP status code to
//!   a variant. Individual endpoints refine this where the same status means
//!   something more specific (a 409 on a file write is a stale version token,
//!   a 422 on reference creation is an existing branch).

use thiserror::Error;

/// Main error type for code-assistant operations
#[derive(Error, Debug)]
pub enum Error {
    /// The access token is missing, empty, or was rejected by the remote API.
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// The repository, path, branch, or reference does not exist.
    #[error("Not found: {resource} - {message}")]
    NotFound { resource: String, message: String },

    /// File content could not be decoded to text.
    #[error("Decode error for {path}: {message}")]
    Decode { path: String, message: String },

    /// The remote rejected a write because the version token was stale, or
    /// because a file appeared at the path while creating it.
    #[error("Write conflict for {path}: {message}")]
    WriteConflict { path: String, message: String },

    /// The credential is valid but lacks the required access.
    #[error("Permission denied: {message}")]
    Permission { message: String },

    /// The resource being created already exists.
    #[error("Conflict: {resource} - {message}")]
    Conflict { resource: String, message: String },

    /// The request was rejected as invalid, either locally or by the remote.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Any other failure status reported by the remote API.
    #[error("Remote API error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// The client configuration is unusable.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A response body did not have the expected shape.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps a failure status from the remote API to an error variant.
    ///
    /// `resource` names what was being accessed (used by the variants that
    /// carry it) and `message` is the remote's explanation.
    pub fn from_status(status: u16, resource: &str, message: String) -> Self {
        match status {
            401 => Error::Authentication { message },
            403 => Error::Permission { message },
            404 => Error::NotFound {
                resource: resource.to_string(),
                message,
            },
            409 => Error::Conflict {
                resource: resource.to_string(),
                message,
            },
            422 => Error::Validation { message },
            _ => Error::Remote { status, message },
        }
    }

    /// Returns true for `Error::NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
