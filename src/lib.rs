//! gitlab-tool - GitLab command-line tool
//!
//! Lists repository commits and downloads CI/CD job artifacts.
//!
//! # Features
//!
//! - Resolve the latest successful pipeline of a branch or tag, optionally
//!   preferring a newer manual/failed/canceled one
//! - Download a single artifact file or the whole artifacts archive
//! - Extract archives with path-traversal protection
//! - List commits with text, table, JSON or YAML output
//!
//! # Example
//!
//! ```bash
//! # Download one file from the 'build' job on 'testing'
//! gitlab-tool download -p 111 -j build -f file_name.txt -r testing
//!
//! # Download, extract and remove the whole archive
//! gitlab-tool dl -p 111 -j build -d ./out -c -x
//!
//! # List commits touching a file
//! gitlab-tool commit ls -p 111 -f src/main.rs --with-stats
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod output;
pub mod ui;

pub use cli::{
    AcceptableStatus, Cli, Command, CommitCommand, CommitListArgs, DownloadArgs, OutputFormat,
};
pub use error::{GitlabError, Result};
pub use gitlab::{
    extract_archive, resolve_job, resolve_pipeline, run_commit_list_command, run_download,
    run_download_command, save_artifacts, ArtifactApi, Commit, CommitQuery, DownloadOptions,
    DownloadOutcome, GitlabClient, Job, Pipeline, PipelineStatus, SaveTarget, TokenResolver,
    UrlResolver,
};
