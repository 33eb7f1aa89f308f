//! CLI argument parsing

mod commit;
mod common;
mod download;
mod enums;

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::error::{GitlabError, Result};

pub use commit::{CommitCommand, CommitListArgs};
pub use common::OutputFormat;
pub use download::DownloadArgs;
pub use enums::AcceptableStatus;

/// GitLab command-line tool
#[derive(Parser, Debug)]
#[command(name = "gitlab-tool")]
#[command(version)]
#[command(
    about = "Provides a gitlab command-line tool to interact with GitLab",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// GitLab personal access token (or set GITLAB_PRIVATE_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// URL for the GitLab server (or set CI_SERVER_URL, default 'https://gitlab.com/')
    #[arg(short = 'u', long, global = true)]
    pub gitlab_url: Option<String>,

    /// Project ID
    #[arg(short = 'p', long, global = true, env = defaults::PROJECT_ID_ENV_VAR)]
    pub project_id: Option<u64>,

    /// Branch or tag
    #[arg(short = 'r', long, global = true, default_value = defaults::REFSPEC)]
    pub refspec: String,

    /// Verbose mode
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Hide progress spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download a single file or the whole archive from job artifacts
    ///
    /// PROCEDURE:
    ///   1. Finds the latest successful pipeline for --refspec
    ///      (or a more recent one with --acceptable-status, or --pipeline-id)
    ///   2. Finds the job named --job-name in that pipeline
    ///   3. Downloads --file-name, or the whole archive as artifacts.zip
    ///   4. Extracts the archive with --extract
    ///
    /// EXAMPLES:
    ///   gitlab-tool download -p 111 -j build -f file_name.txt -r testing
    ///   gitlab-tool dl -p 111 -j build -d ./out -c -x
    #[command(verbatim_doc_comment, visible_aliases = ["d", "dl"])]
    Download(DownloadArgs),

    /// Interaction with commits
    Commit {
        #[command(subcommand)]
        command: CommitCommand,
    },
}

impl Cli {
    /// Project ID from the flag or CI_PROJECT_ID
    pub fn require_project_id(&self) -> Result<u64> {
        self.project_id.filter(|id| *id != 0).ok_or_else(|| {
            GitlabError::Config(format!(
                "'project-id' not set\nUse flag '--project-id' or set environment variable '{}'",
                defaults::PROJECT_ID_ENV_VAR
            ))
        })
    }

    /// Log filter for env_logger; `--verbose` raises this crate to info
    pub fn effective_log_filter(&self) -> String {
        let quiet_levels = ["off", "error", "warn"];
        if self.verbose && quiet_levels.contains(&self.log_level.as_str()) {
            format!("{},gitlab_tool=info", self.log_level)
        } else {
            self.log_level.clone()
        }
    }

    /// Spinners are hidden with --quiet and when verbose log lines are printed
    pub fn spinners_disabled(&self) -> bool {
        self.quiet || self.verbose
    }
}
