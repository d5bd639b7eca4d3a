//! Error types and handling for gamepack
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! Constructors that attach a path to an [`std::io::Error`] live in [`fs`].
//! Build failures are deliberately not errors: see [`crate::compile::BuildOutcome`].

pub mod fs;

pub use fs::{copy_failed, create_failed, metadata_write_failed, remove_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gamepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum GamepackError {
    #[error("Failed to resolve current directory: {reason}")]
    #[diagnostic(code(gamepack::env::current_dir))]
    CurrentDirUnavailable { reason: String },

    // File system errors
    #[error("Failed to create directory '{path}': {reason}")]
    #[diagnostic(
        code(gamepack::fs::create_failed),
        help("Check that the parent directory is writable")
    )]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to remove '{path}': {reason}")]
    #[diagnostic(
        code(gamepack::fs::remove_failed),
        help("A previous output exists at this path and could not be replaced")
    )]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to copy '{path}': {reason}")]
    #[diagnostic(code(gamepack::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to write metadata file '{path}': {reason}")]
    #[diagnostic(code(gamepack::metadata::write_failed))]
    MetadataWriteFailed { path: String, reason: String },

    #[error("Failed to serialize metadata: {reason}")]
    #[diagnostic(code(gamepack::metadata::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gamepack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GamepackError {
    fn from(err: std::io::Error) -> Self {
        GamepackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GamepackError {
    fn from(err: serde_json::Error) -> Self {
        GamepackError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GamepackError>;
