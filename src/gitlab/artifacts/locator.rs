//! Pipeline and job resolution

use log::debug;

use crate::error::{GitlabError, Result};
use crate::gitlab::{ArtifactApi, Pipeline, PipelineStatus};

/// Most recent pipeline on `ref_name` with `status`
async fn latest_pipeline(
    api: &dyn ArtifactApi,
    project_id: u64,
    ref_name: &str,
    status: PipelineStatus,
) -> Result<Pipeline> {
    api.list_pipelines(project_id, ref_name, status)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| GitlabError::PipelineNotFound {
            ref_name: ref_name.to_string(),
            status: status.to_string(),
        })
}

/// Resolve the pipeline to download artifacts from
///
/// The latest successful pipeline on `ref_name` is the default. When
/// `acceptable_status` is manual, failed or canceled, the latest pipeline with
/// that status replaces it if it was updated later. Ties keep the successful one.
pub async fn resolve_pipeline(
    api: &dyn ArtifactApi,
    project_id: u64,
    ref_name: &str,
    acceptable_status: Option<PipelineStatus>,
) -> Result<u64> {
    let default = latest_pipeline(api, project_id, ref_name, PipelineStatus::Success).await?;
    debug!(
        "Latest successful pipeline on '{}': {} (updated {:?})",
        ref_name, default.id, default.updated_at
    );

    let Some(status) = acceptable_status.filter(|s| {
        matches!(
            s,
            PipelineStatus::Manual | PipelineStatus::Failed | PipelineStatus::Canceled
        )
    }) else {
        return Ok(default.id);
    };

    let candidate = latest_pipeline(api, project_id, ref_name, status).await?;
    debug!(
        "Latest {} pipeline on '{}': {} (updated {:?})",
        status, ref_name, candidate.id, candidate.updated_at
    );

    // None sorts before any timestamp, so an undated candidate never wins
    if candidate.updated_at > default.updated_at {
        Ok(candidate.id)
    } else {
        Ok(default.id)
    }
}

/// Find the first job named exactly `job_name` in a pipeline
pub async fn resolve_job(
    api: &dyn ArtifactApi,
    project_id: u64,
    pipeline_id: u64,
    job_name: &str,
) -> Result<u64> {
    let jobs = api.list_pipeline_jobs(project_id, pipeline_id).await?;
    debug!("Pipeline {} has {} jobs", pipeline_id, jobs.len());

    jobs.iter()
        .find(|job| job.name == job_name)
        .map(|job| job.id)
        .ok_or_else(|| GitlabError::JobNotFound {
            job_name: job_name.to_string(),
            pipeline_id,
        })
}
