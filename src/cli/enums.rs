//! Enumerated CLI values

use clap::ValueEnum;

use crate::gitlab::PipelineStatus;

/// Pipeline statuses that may override the latest successful pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AcceptableStatus {
    /// Pipeline waiting for a manual action
    Manual,
    /// Failed pipeline
    Failed,
    /// Canceled pipeline
    Canceled,
}

impl From<AcceptableStatus> for PipelineStatus {
    fn from(status: AcceptableStatus) -> Self {
        match status {
            AcceptableStatus::Manual => PipelineStatus::Manual,
            AcceptableStatus::Failed => PipelineStatus::Failed,
            AcceptableStatus::Canceled => PipelineStatus::Canceled,
        }
    }
}

impl std::fmt::Display for AcceptableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceptableStatus::Manual => write!(f, "manual"),
            AcceptableStatus::Failed => write!(f, "failed"),
            AcceptableStatus::Canceled => write!(f, "canceled"),
        }
    }
}
