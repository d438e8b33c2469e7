//! Common utilities

use std::fs::{self, File};
use std::path::Path;

use crate::core::error::{ToolError, ToolResult};

/// Get file size in bytes
pub fn get_file_size(path: &Path) -> std::io::Result<u64> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.len())
}

/// Check that `path` is an existing regular file we can open for reading
pub fn ensure_readable_file(path: &Path) -> ToolResult<()> {
    let metadata = fs::metadata(path).map_err(|e| ToolError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(ToolError::NotAFile {
            path: path.display().to_string(),
        });
    }

    File::open(path).map_err(|e| ToolError::from_io(path, e))?;
    Ok(())
}

/// Cap a ratio to 1.0
pub fn normalized(count: f64, full_scale: f64) -> f64 {
    (count / full_scale).min(1.0)
}
