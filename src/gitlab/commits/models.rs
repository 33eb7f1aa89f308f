//! Commit data models

use serde::{Deserialize, Serialize};

/// Commit data from GitLab API
///
/// Fields the tool does not use are kept in `other` so that `--long`
/// output shows everything the server sent.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Commit {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    /// Kept verbatim, GitLab reports it with the committer's offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Line statistics, present when requested with `with_stats`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
    pub total: u64,
}

impl Commit {
    pub fn short_id(&self) -> &str {
        self.short_id
            .as_deref()
            .unwrap_or_else(|| self.id.get(..8).unwrap_or(&self.id))
    }

    /// First line of the message when no title is given
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .or_else(|| self.message.as_deref().and_then(|m| m.lines().next()))
            .unwrap_or("")
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn author_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or("")
    }

    pub fn author_email(&self) -> &str {
        self.author_email.as_deref().unwrap_or("")
    }

    pub fn committed_date(&self) -> &str {
        self.committed_date.as_deref().unwrap_or("")
    }

    pub fn web_url(&self) -> &str {
        self.web_url.as_deref().unwrap_or("")
    }
}
