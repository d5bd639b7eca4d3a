//! Game directory discovery
//!
//! This module handles:
//! - Finding immediate child directories of the source root whose name
//!   contains the game pattern (case-insensitive)
//! - Deriving each game's output name by removing the game suffix
//!
//! Discovery is permissive: a missing or unreadable source root is an empty
//! result, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::GameDir;

/// Find child directories of `source` whose name contains `pattern`.
///
/// Only the first level is listed. Results keep the order the directory
/// listing yields them in, which is not sorted.
pub fn find_game_dirs(source: &Path, pattern: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %source.display(), error = %e, "cannot list source directory");
            return Vec::new();
        }
    };

    let pattern = pattern.to_lowercase();

    entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(name = ?file_name, "skipping non UTF-8 directory name");
                return None;
            };
            name.to_lowercase()
                .contains(&pattern)
                .then(|| source.join(name))
        })
        .collect()
}

/// Remove every occurrence of `to_strip` from the final component of `path`.
pub fn derive_name(path: &Path, to_strip: &str) -> String {
    let dir_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if to_strip.is_empty() {
        return dir_name;
    }
    dir_name.replace(to_strip, "")
}

/// Pair each discovered path with its derived name, keeping discovery order.
pub fn pair_with_names(paths: Vec<PathBuf>, to_strip: &str) -> Vec<GameDir> {
    paths
        .into_iter()
        .map(|source| {
            let name = derive_name(&source, to_strip);
            GameDir { source, name }
        })
        .collect()
}
