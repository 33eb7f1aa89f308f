//! GitLab API client module
//!
//! This module provides the REST v4 calls the tool needs: pipelines, jobs,
//! job artifacts and repository commits.

pub mod artifacts;
mod client;
pub mod commits;
mod credentials;
mod host;
pub mod jobs;
pub mod pipelines;
pub mod traits;

pub use artifacts::{
    extract_archive, resolve_job, resolve_pipeline, run_download, run_download_command,
    save_artifacts, DownloadOptions, DownloadOutcome, SaveTarget,
};
pub use client::GitlabClient;
pub use commits::{run_commit_list_command, Commit, CommitQuery, CommitStats};
pub use credentials::TokenResolver;
pub use host::UrlResolver;
pub use jobs::Job;
pub use pipelines::{Pipeline, PipelineQuery, PipelineStatus};
pub use traits::ArtifactApi;
