//! GitLab token resolution

use log::debug;

use crate::config::credentials;
use crate::error::{GitlabError, Result};

/// Token resolution with fallback logic
pub struct TokenResolver {
    gitlab_url: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given instance
    pub fn new(gitlab_url: &str) -> Self {
        Self {
            gitlab_url: gitlab_url.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided and non-empty)
    /// 2. GITLAB_PRIVATE_TOKEN environment variable
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_from(cli_token, std::env::var(credentials::TOKEN_ENV_VAR).ok())
    }

    fn resolve_from(&self, cli_token: Option<&str>, env_token: Option<String>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token);
        }

        Err(GitlabError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "'token' not set for '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      gitlab-tool --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>",
            self.gitlab_url,
            credentials::TOKEN_ENV_VAR
        )
    }
}
