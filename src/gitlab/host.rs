//! GitLab instance URL resolution

use log::debug;

use crate::config::{defaults, host as host_config};

/// Instance URL resolution with fallback logic
pub struct UrlResolver;

impl UrlResolver {
    /// Resolve the instance URL:
    /// 1. CLI argument (if provided and non-empty)
    /// 2. CI_SERVER_URL environment variable (set inside GitLab CI/CD)
    /// 3. https://gitlab.com/
    pub fn resolve(cli_url: Option<&str>) -> String {
        Self::resolve_from(cli_url, std::env::var(host_config::ENV_VAR).ok())
    }

    fn resolve_from(cli_url: Option<&str>, env_url: Option<String>) -> String {
        if let Some(url) = cli_url.filter(|u| !u.is_empty()) {
            debug!("Using GitLab URL from CLI argument: {}", url);
            return url.to_string();
        }

        if let Some(url) = env_url.filter(|u| !u.is_empty()) {
            debug!(
                "Using GitLab URL from {} environment variable: {}",
                host_config::ENV_VAR,
                url
            );
            return url;
        }

        debug!("Using default GitLab URL: {}", defaults::GITLAB_URL);
        defaults::GITLAB_URL.to_string()
    }
}
