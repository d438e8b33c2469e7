//! Tool error taxonomy
//!
//! Every failure a tool can report maps onto one of four exit codes.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::paths::normalize_path;
use crate::exitcode;

/// Errors raised while parsing input or processing a single file.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Bad command line: unknown flag, unknown algorithm, no files.
    #[error("{0}")]
    InvalidInput(String),

    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Cannot read file: {path}")]
    PermissionDenied { path: String },

    /// The path exists but is a directory or other non-regular file.
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for per-file operations.
pub type ToolResult<T> = Result<T, ToolError>;

impl ToolError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = normalize_path(path);
        match source.kind() {
            io::ErrorKind::NotFound => ToolError::NotFound { path },
            io::ErrorKind::PermissionDenied => ToolError::PermissionDenied { path },
            _ => ToolError::Io { path, source },
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::InvalidInput(_) => exitcode::INVALID_INPUT,
            ToolError::NotFound { .. } => exitcode::NOT_FOUND,
            ToolError::PermissionDenied { .. } => exitcode::PERMISSION,
            ToolError::NotAFile { .. } | ToolError::Io { .. } => exitcode::GENERAL,
        }
    }
}
