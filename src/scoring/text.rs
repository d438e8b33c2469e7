//! Content-based algorithms
//!
//! Both read the file as UTF-8. Binary content falls back to the size score.

use std::path::Path;

use super::{Scorer, SizeScorer};
use crate::core::error::ToolResult;
use crate::core::file_reader::{read_content, FileContent};
use crate::core::util::normalized;

/// Line count that maps to a score of 1.0
pub const FULL_SCALE_LINES: f64 = 100.0;

/// Word count that maps to a score of 1.0
pub const FULL_SCALE_WORDS: f64 = 500.0;

/// Scores a file by its number of lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScorer;

/// Scores a file by its number of whitespace-separated words
#[derive(Debug, Clone, Copy, Default)]
pub struct WordScorer;

fn score_text(path: &Path, count: impl Fn(&str) -> usize, full_scale: f64) -> ToolResult<f64> {
    match read_content(path)? {
        FileContent::Text(text) => Ok(normalized(count(&text) as f64, full_scale)),
        FileContent::Binary => SizeScorer.score(path),
    }
}

/// Count lines the way universal-newline readers do: `\n`, `\r\n` and a
/// lone `\r` each end a line, and a trailing unterminated line counts too
pub fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut chars = text.chars().peekable();
    let mut open_line = false;

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                lines += 1;
                open_line = false;
            }
            '\n' => {
                lines += 1;
                open_line = false;
            }
            _ => open_line = true,
        }
    }

    if open_line {
        lines += 1;
    }
    lines
}

impl Scorer for LineScorer {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn score(&self, path: &Path) -> ToolResult<f64> {
        score_text(path, count_lines, FULL_SCALE_LINES)
    }
}

impl Scorer for WordScorer {
    fn name(&self) -> &'static str {
        "words"
    }

    fn score(&self, path: &Path) -> ToolResult<f64> {
        score_text(path, |text| text.split_whitespace().count(), FULL_SCALE_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lines() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "one\ntwo\nthree\nfour\n").unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 0.04);
    }

    #[test]
    fn test_lines_without_trailing_newline() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "one\ntwo").unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 0.02);
    }

    #[test]
    fn test_lines_with_nul_byte_counts_lines() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("n.txt");
        fs::write(&file, b"a\x00b\nc\n").unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 0.02);
    }

    #[test]
    fn test_count_lines_newline_styles() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\n"), 1);
        assert_eq!(count_lines("a\n\n"), 2);
        assert_eq!(count_lines("a\rb\rc"), 3);
        assert_eq!(count_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_lines("a\r\rb"), 3);
    }

    #[test]
    fn test_lines_carriage_returns() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("mac.txt");
        fs::write(&file, "a\rb\rc").unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 0.03);
    }

    #[test]
    fn test_lines_cap() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "x\n".repeat(250)).unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 1.0);
    }

    #[test]
    fn test_words() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "alpha beta\n\tgamma   delta  epsilon\n").unwrap();

        assert_eq!(WordScorer.score(&file).unwrap(), 0.01);
    }

    #[test]
    fn test_binary_falls_back_to_size() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.bin");
        fs::write(&file, [0xffu8; 250]).unwrap();

        assert_eq!(LineScorer.score(&file).unwrap(), 0.25);
        assert_eq!(WordScorer.score(&file).unwrap(), 0.25);
    }

    #[test]
    fn test_missing_file_propagates() {
        let temp = tempdir().unwrap();
        let err = WordScorer.score(&temp.path().join("gone")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
