//! File processing pipeline
//!
//! resolve -> validate -> score, one file at a time, in input order. A failing
//! file is recorded and processing continues with the next one.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::model::{FileRef, ResultSet, ScoreRecord};
use crate::core::paths::absolutize;
use crate::core::util::ensure_readable_file;
use crate::scoring::{Algorithm, Scorer};

/// Score one input path against `cwd`
pub fn process_file(input: &str, cwd: &Path, scorer: &dyn Scorer) -> ScoreRecord {
    let file = FileRef::new(input, absolutize(Path::new(input), cwd));
    tracing::info!("Processing: {}", file.display_path());

    let outcome = ensure_readable_file(&file.path).and_then(|()| scorer.score(&file.path));
    match outcome {
        Ok(score) => {
            tracing::debug!(algorithm = scorer.name(), score, "scored {}", file.input);
            ScoreRecord::scored(file, score)
        }
        Err(err) => {
            tracing::debug!(error = %err, "failed {}", file.input);
            ScoreRecord::failed(file, err)
        }
    }
}

/// Score every input path with the selected algorithm
pub fn process_files(files: &[String], algorithm: Algorithm) -> Result<ResultSet> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let scorer = algorithm.scorer();

    let result_set: ResultSet = files
        .iter()
        .map(|input| process_file(input, &cwd, scorer.as_ref()))
        .collect();

    tracing::debug!(
        total = result_set.len(),
        scored = result_set.scored().count(),
        "processing finished"
    );
    Ok(result_set)
}
