/// Configuration constants for the GitLab REST API
pub mod api {
    /// Base path for GitLab API v4 (relative to the instance URL)
    pub const BASE_PATH: &str = "/api/v4";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Authentication header for personal/project access tokens
    pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

    /// Response header carrying the next page number (empty on the last page)
    pub const NEXT_PAGE_HEADER: &str = "x-next-page";

    /// Page size for paginated list requests (GitLab maximum)
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds (artifact archives can be large)
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the personal access token
    pub const TOKEN_ENV_VAR: &str = "GITLAB_PRIVATE_TOKEN";
}

/// Configuration constants for the GitLab instance URL
pub mod host {
    /// Environment variable set by GitLab CI/CD with the instance URL
    pub const ENV_VAR: &str = "CI_SERVER_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default GitLab instance
    pub const GITLAB_URL: &str = "https://gitlab.com/";

    /// Default branch or tag
    pub const REFSPEC: &str = "master";

    /// Default destination directory for downloads
    pub const DEST: &str = "./";

    /// File name used when the whole artifacts archive is downloaded
    pub const ARCHIVE_NAME: &str = "artifacts.zip";

    /// Environment variable set by GitLab CI/CD with the project ID
    pub const PROJECT_ID_ENV_VAR: &str = "CI_PROJECT_ID";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
