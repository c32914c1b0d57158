//! Error taxonomy for a merge run.
//!
//! Fatal preconditions abort the run before any target file is touched.
//! Per-file variants are caught by the orchestrator, reported, and the run
//! continues with the next file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by library functions.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("input file not found: {0}")]
    MissingInputFile(PathBuf),
    #[error("input file has an invalid JSON format: {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },
    #[error("input entry for language '{lang}' is not an object")]
    InvalidLanguageEntry { lang: String },
    #[error("invalid prefix path '{0}': segments must be non-empty")]
    InvalidPrefixPath(String),
    #[error("target directory not found or is not a directory: {0}")]
    MissingTargetDirectory(PathBuf),
    #[error("'{path}' has an invalid JSON format")]
    TargetNotValidJson { path: PathBuf },
    #[error("'{path}' does not contain a JSON object at the top level")]
    TargetRootNotObject { path: PathBuf },
    #[error("the path '{prefix}' does not exist in the target document")]
    PathNotFound { prefix: String },
    #[error("'{segment}' key is not an object")]
    PathNotAMapping { segment: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
