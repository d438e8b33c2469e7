use std::path::Path;

use super::Scorer;
use crate::core::error::{ToolError, ToolResult};
use crate::core::util::{get_file_size, normalized};

/// Byte length that maps to a score of 1.0
pub const FULL_SCALE_BYTES: f64 = 1000.0;

/// Scores a file by its byte length
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeScorer;

impl SizeScorer {
    pub fn score_len(len: u64) -> f64 {
        normalized(len as f64, FULL_SCALE_BYTES)
    }
}

impl Scorer for SizeScorer {
    fn name(&self) -> &'static str {
        "size"
    }

    fn score(&self, path: &Path) -> ToolResult<f64> {
        let len = get_file_size(path).map_err(|e| ToolError::from_io(path, e))?;
        Ok(Self::score_len(len))
    }
}
