//! Scoring algorithms
//!
//! An algorithm maps one file to a score in `[0.0, 1.0]`. Algorithms are
//! selected by a string key and must be deterministic.

use std::fmt;
use std::path::Path;

use crate::core::error::ToolResult;

pub mod size;
pub mod text;

pub use size::SizeScorer;
pub use text::{LineScorer, WordScorer};

/// A pluggable per-file scoring function
pub trait Scorer {
    /// Key the algorithm is selected by
    fn name(&self) -> &'static str;

    /// Score an existing, readable regular file
    fn score(&self, path: &Path) -> ToolResult<f64>;
}

/// Built-in algorithm keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Size,
    Lines,
    Words,
}

impl Algorithm {
    #[allow(dead_code)]
    pub const ALL: [Algorithm; 3] = [Algorithm::Size, Algorithm::Lines, Algorithm::Words];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Size => "size",
            Algorithm::Lines => "lines",
            Algorithm::Words => "words",
        }
    }

    /// Build the scorer for this key
    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            Algorithm::Size => Box::new(SizeScorer),
            Algorithm::Lines => Box::new(LineScorer),
            Algorithm::Words => Box::new(WordScorer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" | "size-based" => Ok(Algorithm::Size),
            "lines" => Ok(Algorithm::Lines),
            "words" => Ok(Algorithm::Words),
            _ => Err(format!(
                "Unsupported algorithm: {} (expected size, lines or words)",
                s
            )),
        }
    }
}
