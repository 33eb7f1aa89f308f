//! Safe extraction of downloaded artifact archives

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, info};
use zip::ZipArchive;

use crate::error::{GitlabError, Result};

/// Resolve an archive entry name to a path relative to the destination
///
/// `..` may only cancel an earlier component; absolute names are rejected.
fn entry_relative_path(name: &str) -> Result<PathBuf> {
    let illegal = || GitlabError::IllegalPath {
        entry: name.to_string(),
    };

    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(illegal());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(illegal()),
        }
    }
    Ok(relative)
}

fn archive_error(archive_path: &Path, err: impl std::fmt::Display) -> GitlabError {
    GitlabError::ArchiveOpen {
        path: archive_path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Extract a zip archive into `dest_dir`
///
/// Returns the absolute paths written, in archive order. Extraction stops at
/// the first entry that would land outside `dest_dir`; entries extracted
/// before it stay on disk. Unless `keep_source` is set the archive is removed
/// afterwards.
pub fn extract_archive(
    archive_path: &Path,
    dest_dir: &Path,
    keep_source: bool,
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let file = File::open(archive_path).map_err(|e| archive_error(archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| archive_error(archive_path, e))?;

    let root = std::path::absolute(dest_dir)
        .map_err(|e| GitlabError::io("resolve directory", dest_dir, e))?;
    debug!(
        "Extracting {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        root.display()
    );

    let mut extracted = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| archive_error(archive_path, e))?;
        let relative = entry_relative_path(entry.name())?;
        let out_path = if relative.as_os_str().is_empty() {
            root.clone()
        } else {
            root.join(&relative)
        };

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .map_err(|e| GitlabError::io("create directory", &out_path, e))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| GitlabError::io("create directory", parent, e))?;
            }
            {
                let mut out = File::create(&out_path)
                    .map_err(|e| GitlabError::io("create file", &out_path, e))?;
                io::copy(&mut entry, &mut out)
                    .map_err(|e| GitlabError::io("write file", &out_path, e))?;
            }

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(|e| GitlabError::io("set permissions on", &out_path, e))?;
            }
        }

        if verbose {
            info!("Extract: {}", out_path.display());
        }
        extracted.push(out_path);
    }

    drop(archive);
    if !keep_source {
        fs::remove_file(archive_path)
            .map_err(|e| GitlabError::io("remove archive", archive_path, e))?;
        debug!("Removed {}", archive_path.display());
    }

    Ok(extracted)
}
