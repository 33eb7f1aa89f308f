//! Writing downloaded artifacts to the local filesystem

use std::path::{Component, Path, PathBuf};

use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::{GitlabError, Result};
use crate::gitlab::ArtifactApi;

/// Where and what to save
#[derive(Debug, Clone)]
pub struct SaveTarget<'a> {
    pub project_id: u64,
    pub job_id: u64,
    pub ref_name: &'a str,
    pub job_name: &'a str,
    /// Path inside the job artifacts; `None` or empty saves the whole archive
    pub file_name: Option<&'a str>,
    pub dest_dir: &'a Path,
    pub create_dirs: bool,
}

impl SaveTarget<'_> {
    /// Non-empty single-file path, if one was requested
    fn single_file(&self) -> Option<&str> {
        self.file_name.filter(|name| !name.is_empty())
    }
}

/// Reject artifact paths that would leave the destination directory
pub fn validate_artifact_path(file_name: &str) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(file_name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(GitlabError::IllegalPath {
                    entry: file_name.to_string(),
                });
            }
        }
    }
    if relative.as_os_str().is_empty() {
        return Err(GitlabError::IllegalPath {
            entry: file_name.to_string(),
        });
    }
    Ok(relative)
}

async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| GitlabError::io("create directory", path, e))
}

async fn create_file(path: &Path) -> Result<fs::File> {
    fs::File::create(path)
        .await
        .map_err(|e| GitlabError::io("create file", path, e))
}

/// Download a single artifact file or the whole archive into `dest_dir`
///
/// Returns the path of the written file. Existing files are truncated; a
/// failed transfer may leave a partial file behind.
pub async fn save_artifacts(api: &dyn ArtifactApi, target: &SaveTarget<'_>) -> Result<PathBuf> {
    match target.single_file() {
        Some(file_name) => save_single_file(api, target, file_name).await,
        None => save_archive(api, target).await,
    }
}

async fn save_single_file(
    api: &dyn ArtifactApi,
    target: &SaveTarget<'_>,
    file_name: &str,
) -> Result<PathBuf> {
    let relative = validate_artifact_path(file_name)?;
    let path = target.dest_dir.join(&relative);

    if target.create_dirs {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).await?;
        }
    } else {
        if !fs::metadata(target.dest_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            return Err(GitlabError::Io {
                message: format!(
                    "Destination directory '{}' does not exist (use --create-dirs to create it)",
                    target.dest_dir.display()
                ),
            });
        }
        // Directories that are part of the artifact path itself
        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(&target.dest_dir.join(parent)).await?;
        }
    }

    debug!(
        "Saving artifact '{}' of job {} to {}",
        file_name,
        target.job_id,
        path.display()
    );
    let mut file = create_file(&path).await?;
    let size = api
        .download_artifact_file(target.project_id, target.job_id, file_name, &mut file)
        .await?;
    file.flush()
        .await
        .map_err(|e| GitlabError::io("write file", &path, e))?;
    debug!("Wrote {} bytes to {}", size, path.display());

    Ok(path)
}

async fn save_archive(api: &dyn ArtifactApi, target: &SaveTarget<'_>) -> Result<PathBuf> {
    let path = target.dest_dir.join(defaults::ARCHIVE_NAME);

    if target.create_dirs {
        create_dir_all(target.dest_dir).await?;
    }

    debug!(
        "Saving artifacts archive of job '{}' on '{}' to {}",
        target.job_name,
        target.ref_name,
        path.display()
    );
    let mut file = create_file(&path).await?;
    let size = api
        .download_artifacts_archive(target.project_id, target.ref_name, target.job_name, &mut file)
        .await?;
    file.flush()
        .await
        .map_err(|e| GitlabError::io("write file", &path, e))?;
    debug!("Wrote {} bytes to {}", size, path.display());

    Ok(path)
}
