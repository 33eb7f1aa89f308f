//! Pipeline API operations

use crate::error::Result;
use crate::gitlab::GitlabClient;

use super::models::{Pipeline, PipelineStatus};

/// Server-side filters for listing pipelines
#[derive(Debug, Clone, Default)]
pub struct PipelineQuery {
    pub ref_name: Option<String>,
    pub status: Option<PipelineStatus>,
}

impl PipelineQuery {
    /// Build the query string; results are always newest first
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["order_by=id".to_string(), "sort=desc".to_string()];
        if let Some(ref_name) = &self.ref_name {
            parts.push(format!("ref={}", urlencoding::encode(ref_name)));
        }
        if let Some(status) = self.status.and_then(|s| s.as_query_value()) {
            parts.push(format!("status={}", status));
        }
        parts.join("&")
    }
}

impl GitlabClient {
    /// List the most recent pipelines of a project (first page only)
    pub async fn list_project_pipelines(
        &self,
        project_id: u64,
        query: &PipelineQuery,
    ) -> Result<Vec<Pipeline>> {
        let url = format!(
            "{}/pipelines?{}",
            self.project_url(project_id),
            query.to_query_string()
        );
        let error_context = format!("pipelines for project {}", project_id);

        self.fetch_first_page(&url, &error_context).await
    }
}
