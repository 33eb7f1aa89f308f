//! Seam between the artifact workflow and the GitLab API

use async_trait::async_trait;
use tokio::io::AsyncWrite;

use crate::error::Result;
use crate::gitlab::{GitlabClient, Job, Pipeline, PipelineQuery, PipelineStatus};

/// The GitLab calls the artifact workflow depends on
///
/// Implemented by [`GitlabClient`]; tests substitute deterministic fakes.
#[async_trait]
pub trait ArtifactApi: Send + Sync {
    /// Pipelines on `ref_name` with `status`, most recent first
    async fn list_pipelines(
        &self,
        project_id: u64,
        ref_name: &str,
        status: PipelineStatus,
    ) -> Result<Vec<Pipeline>>;

    /// All jobs of a pipeline, in API order
    async fn list_pipeline_jobs(&self, project_id: u64, pipeline_id: u64) -> Result<Vec<Job>>;

    /// Write a single artifact file of a job into `sink`
    async fn download_artifact_file(
        &self,
        project_id: u64,
        job_id: u64,
        artifact_path: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64>;

    /// Write the artifacts archive of the latest `job_name` job on `ref_name` into `sink`
    async fn download_artifacts_archive(
        &self,
        project_id: u64,
        ref_name: &str,
        job_name: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64>;
}

#[async_trait]
impl ArtifactApi for GitlabClient {
    async fn list_pipelines(
        &self,
        project_id: u64,
        ref_name: &str,
        status: PipelineStatus,
    ) -> Result<Vec<Pipeline>> {
        let query = PipelineQuery {
            ref_name: Some(ref_name.to_string()),
            status: Some(status),
        };
        self.list_project_pipelines(project_id, &query).await
    }

    async fn list_pipeline_jobs(&self, project_id: u64, pipeline_id: u64) -> Result<Vec<Job>> {
        GitlabClient::list_pipeline_jobs(self, project_id, pipeline_id).await
    }

    async fn download_artifact_file(
        &self,
        project_id: u64,
        job_id: u64,
        artifact_path: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        self.download_single_artifact(project_id, job_id, artifact_path, sink)
            .await
    }

    async fn download_artifacts_archive(
        &self,
        project_id: u64,
        ref_name: &str,
        job_name: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        self.download_archive(project_id, ref_name, job_name, sink)
            .await
    }
}
