//! Renderer module
//!
//! Renders a ResultSet to one of the output formats: default, json, jsonl, csv.
//! Failed records never produce output lines.

use crate::core::model::{ResultSet, ScoreOutput};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<path>: <score>`
    #[default]
    Default,
    /// A single JSON array
    Json,
    /// One JSON object per line
    Jsonl,
    /// `<path>,<score>`
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "text" => Ok(OutputFormat::Default),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: {} (expected default, json, jsonl or csv)",
                s
            )),
        }
    }
}

/// Format a score the way text outputs print it
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Quote a CSV field when it contains a separator, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renderer for result sets
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a result set to a string, without a trailing newline
    pub fn render(&self, result_set: &ResultSet) -> String {
        let items: Vec<ScoreOutput> = result_set.scored().filter_map(|r| r.to_output()).collect();

        match self.format {
            OutputFormat::Default => self.render_default(&items),
            OutputFormat::Json => self.render_json(&items),
            OutputFormat::Jsonl => self.render_jsonl(&items),
            OutputFormat::Csv => self.render_csv(&items),
        }
    }

    /// Render to a writer, one trailing newline when there is any output
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    fn render_default(&self, items: &[ScoreOutput]) -> String {
        items
            .iter()
            .map(|item| format!("{}: {}", item.filename, format_score(item.score)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a single JSON array
    fn render_json(&self, items: &[ScoreOutput]) -> String {
        serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, items: &[ScoreOutput]) -> String {
        items
            .iter()
            .filter_map(|item| serde_json::to_string(item).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_csv(&self, items: &[ScoreOutput]) -> String {
        items
            .iter()
            .map(|item| format!("{},{}", csv_field(&item.filename), format_score(item.score)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ToolError;
    use crate::core::model::{FileRef, ScoreRecord};
    use std::path::PathBuf;

    fn sample_set() -> ResultSet {
        let mut set = ResultSet::new();
        set.push(ScoreRecord::scored(
            FileRef::new("a.txt", PathBuf::from("/work/a.txt")),
            0.125,
        ));
        set.push(ScoreRecord::failed(
            FileRef::new("gone.txt", PathBuf::from("/work/gone.txt")),
            ToolError::NotFound {
                path: "/work/gone.txt".into(),
            },
        ));
        set.push(ScoreRecord::scored(
            FileRef::new("b.txt", PathBuf::from("/work/b.txt")),
            1.0,
        ));
        set
    }

    #[test]
    fn test_render_default() {
        let output = Renderer::new(OutputFormat::Default).render(&sample_set());
        assert_eq!(output, "/work/a.txt: 0.125\n/work/b.txt: 1.000");
    }

    #[test]
    fn test_render_json() {
        let output = Renderer::new(OutputFormat::Json).render(&sample_set());
        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));

        let parsed: Vec<ScoreOutput> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].filename, "/work/a.txt");
        assert_eq!(parsed[0].score, 0.125);
    }

    #[test]
    fn test_render_json_empty_is_array() {
        let output = Renderer::new(OutputFormat::Json).render(&ResultSet::new());
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_render_jsonl() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&sample_set());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"filename":"/work/a.txt","score":0.125}"#);
    }

    #[test]
    fn test_render_csv() {
        let output = Renderer::new(OutputFormat::Csv).render(&sample_set());
        assert_eq!(output, "/work/a.txt,0.125\n/work/b.txt,1.000");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("/plain/path"), "/plain/path");
        assert_eq!(csv_field("/a,b"), "\"/a,b\"");
        assert_eq!(csv_field("/say \"hi\""), "\"/say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_to_writer() {
        let mut buffer = Vec::new();
        Renderer::new(OutputFormat::Default)
            .render_to(&sample_set(), &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("1.000\n"));
    }

    #[test]
    fn test_render_to_writer_empty() {
        let mut buffer = Vec::new();
        Renderer::new(OutputFormat::Csv)
            .render_to(&ResultSet::new(), &mut buffer)
            .unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(
            "default".parse::<OutputFormat>().unwrap(),
            OutputFormat::Default
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "xml".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.125), "0.125");
        assert_eq!(format_score(0.0), "0.000");
        assert_eq!(format_score(0.1234), "0.123");
    }
}
