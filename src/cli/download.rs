//! Download command arguments

use clap::Parser;
use std::path::PathBuf;

use super::enums::AcceptableStatus;
use crate::config::defaults;

/// Arguments for the 'download' command
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Job name
    #[arg(short = 'j', long)]
    pub job_name: String,

    /// Download only the file with this name (path inside the artifacts)
    ///
    /// Without it the whole artifacts archive is saved as artifacts.zip.
    #[arg(short = 'f', long, verbatim_doc_comment)]
    pub file_name: Option<String>,

    /// Destination directory
    #[arg(short = 'd', long, default_value = defaults::DEST)]
    pub dest: PathBuf,

    /// Create necessary local directory hierarchy
    #[arg(short = 'c', long, default_value_t = false)]
    pub create_dirs: bool,

    /// Keep the archive after extraction
    #[arg(long, default_value_t = false)]
    pub keep_src: bool,

    /// Download artifacts from a specific pipeline ID
    #[arg(long)]
    pub pipeline_id: Option<u64>,

    /// Acceptable pipeline status for downloading artifacts
    ///
    /// A more recent pipeline with this status is preferred over the latest
    /// successful one.
    #[arg(short = 'a', long, value_enum, verbatim_doc_comment)]
    pub acceptable_status: Option<AcceptableStatus>,

    /// Extract files from the archive
    #[arg(short = 'x', long, default_value_t = false)]
    pub extract: bool,
}
