use std::fmt;

/// Custom error type for GitLab operations
#[derive(Debug)]
pub enum GitlabError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Token rejected by the server
    Unauthorized(String),
    /// No pipeline matches the ref/status query
    PipelineNotFound { ref_name: String, status: String },
    /// No job with the requested name in the pipeline
    JobNotFound { job_name: String, pipeline_id: u64 },
    /// Downloaded archive could not be opened
    ArchiveOpen { path: String, reason: String },
    /// Path escapes the destination directory
    IllegalPath { entry: String },
    /// Filesystem create/write/delete failure
    Io { message: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for GitlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitlabError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GitlabError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GitlabError::TokenNotFound(msg) => write!(f, "{}", msg),
            GitlabError::Unauthorized(msg) => write!(f, "Authentication failed: {}", msg),
            GitlabError::PipelineNotFound { ref_name, status } => write!(
                f,
                "No pipeline with status '{}' found for ref '{}'",
                status, ref_name
            ),
            GitlabError::JobNotFound {
                job_name,
                pipeline_id,
            } => write!(
                f,
                "The job '{}' is not found in pipeline {}",
                job_name, pipeline_id
            ),
            GitlabError::ArchiveOpen { path, reason } => {
                write!(f, "Cannot open archive '{}': {}", path, reason)
            }
            GitlabError::IllegalPath { entry } => write!(f, "Illegal file path: '{}'", entry),
            GitlabError::Io { message } => write!(f, "IO error: {}", message),
            GitlabError::Json(msg) => write!(f, "JSON error: {}", msg),
            GitlabError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GitlabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitlabError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GitlabError {
    fn from(err: reqwest::Error) -> Self {
        GitlabError::Http(err)
    }
}

impl From<serde_json::Error> for GitlabError {
    fn from(err: serde_json::Error) -> Self {
        GitlabError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GitlabError {
    fn from(err: std::io::Error) -> Self {
        GitlabError::Io {
            message: err.to_string(),
        }
    }
}

impl GitlabError {
    /// Wrap an IO error with the path it happened on
    pub fn io(action: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        GitlabError::Io {
            message: format!("Failed to {} '{}': {}", action, path.display(), err),
        }
    }
}

/// Result type alias for GitLab operations
pub type Result<T> = std::result::Result<T, GitlabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitlabError::TokenNotFound("token not set".to_string());
        assert!(err.to_string().contains("token not set"));
    }

    #[test]
    fn test_api_error_display() {
        let err = GitlabError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GitlabError>();
    }

    #[test]
    fn test_pipeline_not_found_display() {
        let err = GitlabError::PipelineNotFound {
            ref_name: "main".to_string(),
            status: "success".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("main"));
        assert!(msg.contains("success"));
    }

    #[test]
    fn test_job_not_found_display() {
        let err = GitlabError::JobNotFound {
            job_name: "build".to_string(),
            pipeline_id: 42,
        };
        assert_eq!(err.to_string(), "The job 'build' is not found in pipeline 42");
    }

    #[test]
    fn test_illegal_path_display() {
        let err = GitlabError::IllegalPath {
            entry: "../evil.txt".to_string(),
        };
        assert!(err.to_string().contains("../evil.txt"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GitlabError = json_err.into();
        match err {
            GitlabError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected GitlabError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitlabError = io_err.into();
        match err {
            GitlabError::Io { message } => assert!(message.contains("file not found")),
            _ => panic!("Expected GitlabError::Io"),
        }
    }

    #[test]
    fn test_io_helper_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GitlabError::io("create file", std::path::Path::new("/tmp/x.zip"), io_err);
        let msg = err.to_string();
        assert!(msg.contains("create file"));
        assert!(msg.contains("/tmp/x.zip"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = GitlabError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
