//! File system errors

use std::path::Path;

use super::GamepackError;

/// Creates a directory creation error
pub fn create_failed(path: &Path, err: &std::io::Error) -> GamepackError {
    GamepackError::CreateDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a removal error for a stale destination
pub fn remove_failed(path: &Path, err: &std::io::Error) -> GamepackError {
    GamepackError::RemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a copy error
pub fn copy_failed(path: &Path, reason: impl ToString) -> GamepackError {
    GamepackError::CopyFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn metadata_write_failed(path: &Path, err: &std::io::Error) -> GamepackError {
    GamepackError::MetadataWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
