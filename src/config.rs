//! # Client Configuration
//!
//! Connection settings for the remote API: where it lives and which token to
//! present. Both come from the process environment in normal use
//! (`GITHUB_API_URL`, `GITHUB_TOKEN`); `ClientConfig::new` builds one
//! explicitly for embedders and tests.
//!
//! A missing or empty token is reported as an authentication failure at the
//! moment the configuration is built, before any request is made.

use std::env;

use url::Url;

use crate::defaults::{API_URL_ENV, DEFAULT_API_URL, TOKEN_ENV};
use crate::error::{Error, Result};

/// Settings needed to talk to the remote API.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub token: String,
}

impl ClientConfig {
    /// Builds a configuration from an explicit base URL and token.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Authentication {
                message: format!("no access token provided; set {TOKEN_ENV}"),
            });
        }

        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("API URL cannot be used as a base: {api_url}"),
            });
        }

        Ok(Self {
            api_url,
            token: token.to_string(),
        })
    }

    /// Reads `GITHUB_TOKEN` and, if set, `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV).unwrap_or_default();
        let api_url = env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(&api_url, &token)
    }
}

// Keep the token out of debug output and logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, _)| (*key, env::var(key).ok()))
                .collect();
            for (key, value) in vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let result = ClientConfig::new(DEFAULT_API_URL, "   ");
        assert!(matches!(result, Err(Error::Authentication { .. })));
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let result = ClientConfig::new("not a url", "ghp_token");
        assert!(matches!(result, Err(Error::UrlParse(_))));

        let result = ClientConfig::new("mailto:someone@example.com", "ghp_token");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new(DEFAULT_API_URL, "ghp_secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        let _guard = EnvGuard::set(&[(TOKEN_ENV, None), (API_URL_ENV, None)]);
        let result = ClientConfig::from_env();
        match result {
            Err(Error::Authentication { message }) => assert!(message.contains(TOKEN_ENV)),
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_api_url() {
        let _guard = EnvGuard::set(&[(TOKEN_ENV, Some("ghp_token")), (API_URL_ENV, None)]);
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.token, "ghp_token");
    }

    #[test]
    #[serial]
    fn test_from_env_custom_api_url() {
        let _guard = EnvGuard::set(&[
            (TOKEN_ENV, Some("ghp_token")),
            (API_URL_ENV, Some("https://ghe.example.com/api/v3")),
        ]);
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url.host_str(), Some("ghe.example.com"));
        assert_eq!(config.api_url.path(), "/api/v3");
    }
}
