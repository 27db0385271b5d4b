//! # GitHub REST Backend
//!
//! `GitHubApi` implements [`RemoteApi`] against the GitHub REST API v3 (or any
//! server that speaks it, such as GitHub Enterprise) using a blocking
//! `reqwest` client. Each trait method is a single HTTP request.
//!
//! Failure statuses are turned into [`Error`] variants by
//! [`Error::from_status`] and then refined per endpoint:
//!
//! - `PUT contents`: 409, and 422 complaining about the `sha`, become
//!   `Error::WriteConflict`.
//! - `POST git/refs`: 422 "Reference already exists" becomes `Error::Conflict`.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ClientConfig;
use crate::defaults::user_agent;
use crate::encoding::encode_content;
use crate::error::{Error, Result};
use crate::model::{
    DirectoryEntry, EntryKind, FileWrite, NewPullRequest, PullRequestResult, RemoteContents,
    RemoteFile, RepoId,
};
use crate::remote::RemoteApi;

const ACCEPT_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Blocking client for the GitHub REST API.
pub struct GitHubApi {
    http: Client,
    api_url: Url,
    token: String,
}

impl GitHubApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Builds `<api>/repos/<owner>/<name>/<tail...>`. Each tail item may
    /// contain `/`; empty segments are dropped and the rest are
    /// percent-encoded individually.
    fn endpoint(&self, repo: &RepoId, tail: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config {
                message: format!("API URL cannot be used as a base: {}", self.api_url),
            })?
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.name.as_str()])
            .extend(
                tail.iter()
                    .flat_map(|part| part.split('/'))
                    .filter(|segment| !segment.is_empty()),
            );
        Ok(url)
    }

    fn send(&self, request: RequestBuilder, url: &Url, resource: &str) -> Result<Response> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .map_err(|e| Error::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(Error::from_status(
            status.as_u16(),
            resource,
            describe_failure(status.canonical_reason(), &body),
        ))
    }
}

impl RemoteApi for GitHubApi {
    fn get_repository(&self, repo: &RepoId) -> Result<()> {
        let url = self.endpoint(repo, &[])?;
        let resource = format!("repository {repo}");
        self.send(self.http.get(url.clone()), &url, &resource)?;
        Ok(())
    }

    fn get_contents(&self, repo: &RepoId, path: &str, reference: &str) -> Result<RemoteContents> {
        let url = self.endpoint(repo, &["contents", path])?;
        let resource = format!("{}@{reference}", display_path(path));
        let request = self.http.get(url.clone()).query(&[("ref", reference)]);
        let body: ContentsBody = parse(self.send(request, &url, &resource)?, &url)?;
        into_contents(body, path)
    }

    fn put_file(&self, repo: &RepoId, write: &FileWrite) -> Result<String> {
        let url = self.endpoint(repo, &["contents", &write.path])?;
        let resource = format!("{}@{}", write.path, write.branch);
        let body = PutFileBody {
            message: &write.message,
            content: encode_content(&write.content),
            branch: &write.branch,
            sha: write.sha.as_deref(),
        };

        let response = self
            .send(self.http.put(url.clone()).json(&body), &url, &resource)
            .map_err(|e| refine_write_error(e, &write.path))?;
        let written: PutFileResponse = parse(response, &url)?;
        Ok(written.content.sha)
    }

    fn get_branch_head(&self, repo: &RepoId, branch: &str) -> Result<String> {
        let url = self.endpoint(repo, &["git", "ref", "heads", branch])?;
        let resource = format!("branch {branch}");
        let reference: GitRef = parse(self.send(self.http.get(url.clone()), &url, &resource)?, &url)?;
        Ok(reference.object.sha)
    }

    fn create_branch_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<()> {
        let url = self.endpoint(repo, &["git", "refs"])?;
        let ref_name = format!("refs/heads/{branch}");
        let body = NewGitRef {
            r#ref: &ref_name,
            sha,
        };

        self.send(self.http.post(url.clone()).json(&body), &url, &ref_name)
            .map_err(|e| refine_ref_error(e, &ref_name))?;
        Ok(())
    }

    fn create_pull(&self, repo: &RepoId, request: &NewPullRequest) -> Result<PullRequestResult> {
        let url = self.endpoint(repo, &["pulls"])?;
        let resource = format!("pull request {} -> {}", request.head, request.base);
        let response = self.send(self.http.post(url.clone()).json(request), &url, &resource)?;
        let pull: PullBody = parse(response, &url)?;
        Ok(PullRequestResult {
            number: pull.number,
            url: pull.html_url,
            title: pull.title,
        })
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn parse<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
    let text = response.text().map_err(|e| Error::Network {
        url: url.to_string(),
        message: format!("failed to read response body: {e}"),
    })?;
    serde_json::from_str(&text).map_err(|e| Error::Serialization {
        message: format!("unexpected response from {url}: {e}"),
    })
}

/// Extracts a readable explanation from an error response body.
///
/// GitHub answers with `{"message": ..., "errors": [...]}`; the details in
/// `errors` are appended when present. Non-JSON bodies are used as-is.
fn describe_failure(reason: Option<&str>, body: &str) -> String {
    let fallback = || {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            reason.unwrap_or("request failed").to_string()
        } else {
            trimmed.to_string()
        }
    };

    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return fallback();
    };

    let details: Vec<String> = parsed
        .errors
        .iter()
        .filter_map(|detail| match detail {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("code"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            _ => None,
        })
        .collect();

    if details.is_empty() {
        parsed.message
    } else {
        format!("{} ({})", parsed.message, details.join("; "))
    }
}

fn refine_write_error(error: Error, path: &str) -> Error {
    match error {
        Error::Conflict { message, .. } => Error::WriteConflict {
            path: path.to_string(),
            message,
        },
        Error::Validation { message } if message.contains("sha") => Error::WriteConflict {
            path: path.to_string(),
            message,
        },
        other => other,
    }
}

fn refine_ref_error(error: Error, ref_name: &str) -> Error {
    match error {
        Error::Validation { message } if message.contains("already exists") => Error::Conflict {
            resource: ref_name.to_string(),
            message,
        },
        other => other,
    }
}

fn into_contents(body: ContentsBody, path: &str) -> Result<RemoteContents> {
    match body {
        ContentsBody::Listing(items) => Ok(RemoteContents::Directory(
            items
                .into_iter()
                .map(|item| DirectoryEntry {
                    kind: EntryKind::from_remote(&item.kind),
                    name: item.name,
                    path: item.path,
                    size: item.size,
                })
                .collect(),
        )),
        ContentsBody::Item(item) if item.kind == "file" => Ok(RemoteContents::File(RemoteFile {
            path: item.path,
            sha: item.sha,
            content: item.content.unwrap_or_default(),
            encoding: item.encoding.unwrap_or_else(|| "base64".to_string()),
        })),
        ContentsBody::Item(item) => Err(Error::Validation {
            message: format!(
                "{} is a {}, not a file or directory",
                display_path(path),
                item.kind
            ),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    path: String,
    sha: String,
    #[serde(default)]
    size: u64,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// A directory answers with an array, anything else with a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsBody {
    Listing(Vec<ContentItem>),
    Item(ContentItem),
}

#[derive(Debug, Serialize)]
struct PutFileBody<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutFileResponse {
    content: ShaOnly,
}

#[derive(Debug, Deserialize)]
struct ShaOnly {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct GitRef {
    object: ShaOnly,
}

#[derive(Debug, Serialize)]
struct NewGitRef<'a> {
    r#ref: &'a str,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct PullBody {
    number: u64,
    html_url: String,
    title: String,
}
