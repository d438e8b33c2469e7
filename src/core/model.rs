//! Result model
//!
//! Every tool maps its per-file outcome to a `ScoreRecord` before rendering.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::error::ToolError;
use crate::core::paths::normalize_path;
use crate::exitcode;

/// An input path and the absolute path it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// The path as given on the command line or stdin
    pub input: String,

    /// Absolute, normalized path
    pub path: PathBuf,
}

impl FileRef {
    pub fn new(input: impl Into<String>, path: PathBuf) -> Self {
        Self {
            input: input.into(),
            path,
        }
    }

    /// Absolute path as printed in results
    pub fn display_path(&self) -> String {
        normalize_path(&self.path)
    }
}

/// Outcome of scoring one file
#[derive(Debug)]
pub enum Status {
    Scored(f64),
    Failed(ToolError),
}

/// One file reference paired with its outcome
#[derive(Debug)]
pub struct ScoreRecord {
    pub file: FileRef,
    pub status: Status,
}

impl ScoreRecord {
    pub fn scored(file: FileRef, score: f64) -> Self {
        Self {
            file,
            status: Status::Scored(score),
        }
    }

    pub fn failed(file: FileRef, error: ToolError) -> Self {
        Self {
            file,
            status: Status::Failed(error),
        }
    }

    /// Score, if the file was processed
    pub fn score(&self) -> Option<f64> {
        match self.status {
            Status::Scored(score) => Some(score),
            Status::Failed(_) => None,
        }
    }

    /// Error, if the file failed
    pub fn error(&self) -> Option<&ToolError> {
        match &self.status {
            Status::Scored(_) => None,
            Status::Failed(err) => Some(err),
        }
    }

    /// Serializable view of a successful record
    pub fn to_output(&self) -> Option<ScoreOutput> {
        self.score().map(|score| ScoreOutput {
            filename: self.file.display_path(),
            score,
        })
    }
}

/// Shape of one result in json/jsonl output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutput {
    pub filename: String,
    pub score: f64,
}

/// Ordered collection of records, in input order
#[derive(Debug, Default)]
pub struct ResultSet {
    pub records: Vec<ScoreRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn push(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that produced a score
    pub fn scored(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter().filter(|r| r.score().is_some())
    }

    /// Records that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&ScoreRecord, &ToolError)> {
        self.records
            .iter()
            .filter_map(|r| r.error().map(|err| (r, err)))
    }

    /// Aggregate exit code: 0 if every file scored, otherwise the code of the
    /// first failure in input order
    pub fn exit_code(&self) -> i32 {
        self.failures()
            .next()
            .map(|(_, err)| err.exit_code())
            .unwrap_or(exitcode::OK)
    }
}

impl FromIterator<ScoreRecord> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ScoreRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
