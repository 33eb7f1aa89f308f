//! Pipeline data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline status as used for filtering and selection
///
/// Statuses the tool never filters on deserialize as `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Success,
    Manual,
    Failed,
    Canceled,
    #[serde(other)]
    Unspecified,
}

impl PipelineStatus {
    /// Value of the `status` query parameter, if the status can be queried
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            PipelineStatus::Success => Some("success"),
            PipelineStatus::Manual => Some("manual"),
            PipelineStatus::Failed => Some("failed"),
            PipelineStatus::Canceled => Some("canceled"),
            PipelineStatus::Unspecified => None,
        }
    }
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value().unwrap_or("unspecified"))
    }
}

/// Pipeline data from GitLab API
#[derive(Deserialize, Debug, Clone)]
pub struct Pipeline {
    pub id: u64,
    pub status: PipelineStatus,
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
    pub sha: Option<String>,
    pub web_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
