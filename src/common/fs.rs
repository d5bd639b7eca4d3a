//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{self, Result};

/// Create `path` and any missing parents. No-op if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| error::create_failed(path, &e))
}

/// Remove whatever is at `path`: a directory tree, a file, or a symlink.
///
/// Symlinks are unlinked, never followed. A missing path is not an error.
pub fn remove_existing(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(error::remove_failed(path, &e)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| error::remove_failed(path, &e))
}

/// Copy a directory tree recursively, following symlinks inside `src`.
///
/// `dst` is created if missing; files already in it are overwritten but not
/// removed. Use [`copy_and_overwrite`] for a clean replacement.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            error::copy_failed(&path, e)
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| error::copy_failed(entry.path(), e))?;
        let dst_path = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path).map_err(|e| error::create_failed(&dst_path, &e))?;
        } else {
            fs::copy(entry.path(), &dst_path).map_err(|e| error::copy_failed(entry.path(), e))?;
        }
    }

    Ok(())
}

/// Replace `dest` with a fresh copy of `source`.
///
/// Not atomic: a failure mid-copy leaves a partial `dest` behind.
pub fn copy_and_overwrite(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(error::copy_failed(source, "source is not a directory"));
    }

    debug!(dest = %dest.display(), "removing previous output");
    remove_existing(dest)?;

    debug!(source = %source.display(), dest = %dest.display(), "copying game directory");
    copy_dir_recursive(source, dest)
}
