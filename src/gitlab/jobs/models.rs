//! Job data models

use serde::Deserialize;

/// Job data from GitLab API
#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    pub id: u64,
    pub name: String,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub pipeline: Option<JobPipeline>,
}

/// Pipeline reference embedded in a job
#[derive(Deserialize, Debug, Clone)]
pub struct JobPipeline {
    pub id: u64,
}

impl Job {
    /// ID of the pipeline the job belongs to
    pub fn pipeline_id(&self) -> Option<u64> {
        self.pipeline.as_ref().map(|p| p.id)
    }
}
