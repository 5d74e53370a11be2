//! Splitter errors.

use std::path::PathBuf;

/// Errors that can occur while splitting a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Input stylesheet not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
