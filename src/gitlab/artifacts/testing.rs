//! In-memory `ArtifactApi` used by the artifact workflow tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{GitlabError, Result};
use crate::gitlab::jobs::JobPipeline;
use crate::gitlab::{ArtifactApi, Job, Pipeline, PipelineStatus};

/// Deterministic fake keyed the same way the real endpoints are
#[derive(Default)]
pub(crate) struct FakeApi {
    pipelines: HashMap<(String, PipelineStatus), Vec<Pipeline>>,
    jobs: HashMap<u64, Vec<Job>>,
    files: HashMap<(u64, String), Vec<u8>>,
    archives: HashMap<(String, String), Vec<u8>>,
    pub pipeline_queries: Mutex<Vec<(String, PipelineStatus)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pipelines(
        mut self,
        ref_name: &str,
        status: PipelineStatus,
        pipelines: Vec<Pipeline>,
    ) -> Self {
        self.pipelines
            .insert((ref_name.to_string(), status), pipelines);
        self
    }

    pub fn with_jobs(mut self, pipeline_id: u64, jobs: Vec<Job>) -> Self {
        self.jobs.insert(pipeline_id, jobs);
        self
    }

    pub fn with_file(mut self, job_id: u64, path: &str, content: &[u8]) -> Self {
        self.files
            .insert((job_id, path.to_string()), content.to_vec());
        self
    }

    pub fn with_archive(mut self, ref_name: &str, job_name: &str, content: Vec<u8>) -> Self {
        self.archives
            .insert((ref_name.to_string(), job_name.to_string()), content);
        self
    }

    pub fn queried_statuses(&self) -> Vec<PipelineStatus> {
        self.pipeline_queries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, status)| *status)
            .collect()
    }
}

pub(crate) fn pipeline(id: u64, status: PipelineStatus, updated_at: Option<&str>) -> Pipeline {
    Pipeline {
        id,
        status,
        ref_name: Some("main".to_string()),
        sha: None,
        web_url: None,
        updated_at: updated_at.map(|ts| {
            DateTime::parse_from_rfc3339(ts)
                .unwrap()
                .with_timezone(&Utc)
        }),
    }
}

pub(crate) fn job(id: u64, name: &str, pipeline_id: u64) -> Job {
    Job {
        id,
        name: name.to_string(),
        status: Some("success".to_string()),
        stage: None,
        pipeline: Some(JobPipeline { id: pipeline_id }),
    }
}

fn not_found(what: String) -> GitlabError {
    GitlabError::Api {
        status: 404,
        message: format!("Failed to fetch {}: 404 Not found", what),
    }
}

async fn write_all(sink: &mut (dyn AsyncWrite + Unpin + Send), content: &[u8]) -> Result<u64> {
    sink.write_all(content).await?;
    sink.flush().await?;
    Ok(content.len() as u64)
}

#[async_trait]
impl ArtifactApi for FakeApi {
    async fn list_pipelines(
        &self,
        _project_id: u64,
        ref_name: &str,
        status: PipelineStatus,
    ) -> Result<Vec<Pipeline>> {
        self.pipeline_queries
            .lock()
            .unwrap()
            .push((ref_name.to_string(), status));
        Ok(self
            .pipelines
            .get(&(ref_name.to_string(), status))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_pipeline_jobs(&self, _project_id: u64, pipeline_id: u64) -> Result<Vec<Job>> {
        Ok(self.jobs.get(&pipeline_id).cloned().unwrap_or_default())
    }

    async fn download_artifact_file(
        &self,
        _project_id: u64,
        job_id: u64,
        artifact_path: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        let content = self
            .files
            .get(&(job_id, artifact_path.to_string()))
            .ok_or_else(|| not_found(format!("artifact '{}'", artifact_path)))?;
        write_all(sink, content).await
    }

    async fn download_artifacts_archive(
        &self,
        _project_id: u64,
        ref_name: &str,
        job_name: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        let content = self
            .archives
            .get(&(ref_name.to_string(), job_name.to_string()))
            .ok_or_else(|| not_found(format!("archive of job '{}'", job_name)))?;
        write_all(sink, content).await
    }
}

/// Build an in-memory zip from (name, content) pairs; names ending in '/' are directories
pub(crate) fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}
