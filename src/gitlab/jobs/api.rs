//! Job API operations

use crate::error::Result;
use crate::gitlab::GitlabClient;

use super::models::Job;

impl GitlabClient {
    /// List all jobs of a pipeline, in API order
    pub async fn list_pipeline_jobs(&self, project_id: u64, pipeline_id: u64) -> Result<Vec<Job>> {
        let url = format!(
            "{}/pipelines/{}/jobs",
            self.project_url(project_id),
            pipeline_id
        );
        let error_context = format!("jobs for pipeline {}", pipeline_id);

        self.fetch_all_pages(&url, &error_context).await
    }
}
