//! File reading for content-based algorithms
//!
//! Text algorithms need UTF-8 content; anything else is reported as binary so
//! the caller can fall back to a byte-based score. NUL is valid UTF-8 and does
//! not make a file binary.

use std::fs;
use std::path::Path;

use crate::core::error::{ToolError, ToolResult};

/// Content of a file as seen by text algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    /// Not valid UTF-8
    Binary,
}

/// Read a file for text scoring
pub fn read_content(path: &Path) -> ToolResult<FileContent> {
    let bytes = fs::read(path).map_err(|e| ToolError::from_io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(FileContent::Text(text)),
        Err(_) => {
            tracing::debug!(path = %path.display(), "binary content (invalid UTF-8)");
            Ok(FileContent::Binary)
        }
    }
}
