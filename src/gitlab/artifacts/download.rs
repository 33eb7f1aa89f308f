//! Download workflow: locate, save, extract

use std::path::PathBuf;

use log::{debug, info};

use super::extract::extract_archive;
use super::locator::{resolve_job, resolve_pipeline};
use super::saver::{save_artifacts, SaveTarget};
use crate::cli::{Cli, DownloadArgs};
use crate::error::{GitlabError, Result};
use crate::gitlab::{ArtifactApi, PipelineStatus};

/// Everything one download run needs, detached from the CLI types
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub project_id: u64,
    pub ref_name: String,
    pub job_name: String,
    pub file_name: Option<String>,
    pub dest_dir: PathBuf,
    pub create_dirs: bool,
    /// Explicit pipeline; zero counts as unset
    pub pipeline_id: Option<u64>,
    pub acceptable_status: Option<PipelineStatus>,
    pub extract: bool,
    pub keep_source: bool,
    pub verbose: bool,
}

impl DownloadOptions {
    /// Build options from parsed command-line arguments
    pub fn from_cli(cli: &Cli, args: &DownloadArgs) -> Result<Self> {
        Ok(Self {
            project_id: cli.require_project_id()?,
            ref_name: cli.refspec.clone(),
            job_name: args.job_name.clone(),
            file_name: args.file_name.clone().filter(|f| !f.is_empty()),
            dest_dir: args.dest.clone(),
            create_dirs: args.create_dirs,
            pipeline_id: args.pipeline_id,
            acceptable_status: args.acceptable_status.map(PipelineStatus::from),
            extract: args.extract,
            keep_source: args.keep_src,
            verbose: cli.verbose,
        })
    }
}

/// What a download run produced
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    pub pipeline_id: u64,
    pub job_id: u64,
    pub saved_path: PathBuf,
    /// Extracted paths, empty unless the archive was extracted
    pub extracted: Vec<PathBuf>,
}

/// Run a download: resolve pipeline and job, save, optionally extract
///
/// Steps run in order and the first failure aborts the rest.
pub async fn run_download(
    api: &dyn ArtifactApi,
    options: &DownloadOptions,
) -> Result<DownloadOutcome> {
    let pipeline_id = match options.pipeline_id.filter(|id| *id != 0) {
        Some(id) => {
            debug!("Using explicit pipeline {}", id);
            id
        }
        None => {
            resolve_pipeline(
                api,
                options.project_id,
                &options.ref_name,
                options.acceptable_status,
            )
            .await?
        }
    };
    if options.verbose {
        info!("Pipeline ID: {}", pipeline_id);
    }

    let job_id = resolve_job(api, options.project_id, pipeline_id, &options.job_name).await?;
    if options.verbose {
        info!("Job ID: {}", job_id);
    }

    let target = SaveTarget {
        project_id: options.project_id,
        job_id,
        ref_name: &options.ref_name,
        job_name: &options.job_name,
        file_name: options.file_name.as_deref(),
        dest_dir: &options.dest_dir,
        create_dirs: options.create_dirs,
    };
    let saved_path = save_artifacts(api, &target).await?;
    if options.verbose {
        info!("Saved: {}", saved_path.display());
    }

    let extracted = if options.extract && options.file_name.is_none() {
        let archive = saved_path.clone();
        let dest_dir = options.dest_dir.clone();
        let (keep_source, verbose) = (options.keep_source, options.verbose);
        tokio::task::spawn_blocking(move || {
            extract_archive(&archive, &dest_dir, keep_source, verbose)
        })
        .await
        .map_err(|e| GitlabError::Io {
            message: format!("Extraction of '{}' did not finish: {}", saved_path.display(), e),
        })??
    } else {
        Vec::new()
    };

    Ok(DownloadOutcome {
        pipeline_id,
        job_id,
        saved_path,
        extracted,
    })
}
