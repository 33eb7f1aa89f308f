//! Job artifacts: locating the job, saving its artifacts, extracting archives

mod api;
mod commands;
mod download;
mod extract;
mod locator;
mod saver;
#[cfg(test)]
pub(crate) mod testing;

pub use commands::run_download_command;
pub use download::{run_download, DownloadOptions, DownloadOutcome};
pub use extract::extract_archive;
pub use locator::{resolve_job, resolve_pipeline};
pub use saver::{save_artifacts, validate_artifact_path, SaveTarget};
