//! Repository commit API operations

use chrono::{DateTime, SecondsFormat, Utc};

use crate::cli::CommitListArgs;
use crate::error::Result;
use crate::gitlab::GitlabClient;

use super::models::Commit;

/// Filters for listing repository commits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitQuery {
    pub ref_name: Option<String>,
    pub all: bool,
    pub path: Option<String>,
    pub first_parent: bool,
    pub with_stats: bool,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl CommitQuery {
    /// Build a query for `ref_name` from 'commit list' arguments
    pub fn from_args(ref_name: &str, args: &CommitListArgs) -> Self {
        Self {
            ref_name: Some(ref_name.to_string()).filter(|r| !r.is_empty()),
            all: args.all,
            path: args.file.clone().filter(|f| !f.is_empty()),
            first_parent: args.first_parent,
            with_stats: args.with_stats,
            since: args.since,
            until: args.until,
        }
    }

    /// Build the query string; boolean filters are sent only when set
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref_name) = &self.ref_name {
            parts.push(format!("ref_name={}", urlencoding::encode(ref_name)));
        }
        if self.all {
            parts.push("all=true".to_string());
        }
        if let Some(path) = &self.path {
            parts.push(format!("path={}", urlencoding::encode(path)));
        }
        if self.with_stats {
            parts.push("with_stats=true".to_string());
        }
        if self.first_parent {
            parts.push("first_parent=true".to_string());
        }
        if let Some(since) = &self.since {
            parts.push(format!("since={}", encode_timestamp(since)));
        }
        if let Some(until) = &self.until {
            parts.push(format!("until={}", encode_timestamp(until)));
        }
        parts.join("&")
    }
}

fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    urlencoding::encode(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)).into_owned()
}

impl GitlabClient {
    /// List repository commits matching `query` (all pages)
    pub async fn list_commits(&self, project_id: u64, query: &CommitQuery) -> Result<Vec<Commit>> {
        let query_string = query.to_query_string();
        let url = if query_string.is_empty() {
            format!("{}/repository/commits", self.project_url(project_id))
        } else {
            format!(
                "{}/repository/commits?{}",
                self.project_url(project_id),
                query_string
            )
        };
        let error_context = format!("commits for project {}", project_id);

        self.fetch_all_pages(&url, &error_context).await
    }
}
