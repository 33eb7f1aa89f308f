//! Commit command definitions and arguments

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'commit'
#[derive(Subcommand, Debug)]
pub enum CommitCommand {
    /// Get list of commits
    ///
    /// EXAMPLES:
    ///   gitlab-tool commit list -p 111 -r main
    ///   gitlab-tool commit ls -p 111 --since 2024-01-01T00:00:00Z --with-stats
    ///   gitlab-tool commit ls -p 111 -f src/main.rs --format table
    #[command(verbatim_doc_comment, visible_alias = "ls")]
    List(CommitListArgs),
}

/// Arguments for 'commit list'
#[derive(Parser, Debug)]
pub struct CommitListArgs {
    /// Retrieve every commit from the repository
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,

    /// Commits for this file
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// All info about commits in output
    #[arg(short = 'l', long, default_value_t = false)]
    pub long: bool,

    /// Follow only the first parent commit upon seeing a merge commit
    #[arg(long, default_value_t = false)]
    pub first_parent: bool,

    /// Stats about each commit will be added to the response
    #[arg(long, default_value_t = false)]
    pub with_stats: bool,

    /// Only commits after or on this date, ISO 8601 format YYYY-MM-DDTHH:MM:SSZ
    #[arg(long, value_parser = parse_timestamp)]
    pub since: Option<DateTime<Utc>>,

    /// Only commits before or on this date, ISO 8601 format YYYY-MM-DDTHH:MM:SSZ
    #[arg(long, value_parser = parse_timestamp)]
    pub until: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("error converting date '{}': {}", value, e))
}
