//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::core::error::ToolError;
use crate::core::render::{OutputFormat, Renderer};
use crate::exitcode;
use crate::process::process_files;
use crate::scoring::Algorithm;

/// sample-tool - process files and output scores.
#[derive(Parser, Debug)]
#[command(name = "sample-tool")]
#[command(
    author,
    version,
    about,
    long_about = r#"Score each input file with a named algorithm and print one result per file.

Output formats:
- default: `<absolute_path>: <score>`
- json: a single JSON array of {"filename", "score"} objects
- jsonl: one JSON object per line
- csv: `<absolute_path>,<score>`

Exit codes:
    0  all files processed
    1  general processing error
    2  invalid input
    3  file not found
    4  permission error

Examples:
    sample-tool file.txt
    sample-tool file1.txt file2.txt
    sample-tool -q file.txt            # quiet mode, exit code only
    sample-tool -a lines file.txt      # use the lines algorithm
    sample-tool --format csv *.txt
    find . -name "*.txt" | sample-tool # read paths from stdin
"#
)]
pub struct Cli {
    /// Quiet mode - output only the exit code.
    #[arg(
        short,
        long,
        long_help = "Suppress all output, including error messages. The outcome is\n\
reported through the exit code only."
    )]
    pub quiet: bool,

    /// Algorithm to use for scoring (size/lines/words).
    #[arg(
        short,
        long,
        env = "SAMPLE_TOOL_ALGORITHM",
        default_value = "size",
        value_name = "NAME",
        long_help = "Algorithm to use for scoring.\n\n\
Supported values:\n\
- size (default): file size, 1000 bytes = 1.0\n\
- lines: line count, 100 lines = 1.0\n\
- words: word count, 500 words = 1.0\n\n\
lines and words fall back to size for binary files."
    )]
    pub algorithm: Algorithm,

    /// Verbose output (log each file to stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (default/json/jsonl/csv).
    #[arg(
        short = 'o',
        long,
        env = "SAMPLE_TOOL_FORMAT",
        default_value = "default",
        value_name = "FORMAT"
    )]
    pub format: OutputFormat,

    /// Disable colored error messages.
    #[arg(long)]
    pub no_color: bool,

    /// Additional files to process.
    #[arg(short = 'f', long = "files", value_name = "FILE", num_args = 1..)]
    pub file_list: Vec<String>,

    /// Files to process (if none provided, read from stdin).
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Cli {
    /// Positional files followed by `--files` entries
    pub fn input_files(&self) -> Vec<String> {
        self.files
            .iter()
            .chain(self.file_list.iter())
            .cloned()
            .collect()
    }
}

/// Whether the raw arguments ask for quiet mode
///
/// Used when parsing itself failed, so the parsed flag is not available. clap
/// re-parses with errors ignored and keeps whatever it matched before the
/// failing argument.
pub fn quiet_requested(args: &[OsString]) -> bool {
    Cli::command()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .ok()
        .and_then(|matches| matches.try_get_one::<bool>("quiet").ok().flatten().copied())
        .unwrap_or(false)
}

/// Report a clap parse failure and return the exit code to use
///
/// `--help` and `--version` are explicit requests for output and are printed
/// even with `-q`.
pub fn handle_parse_error(err: clap::Error, args: &[OsString]) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exitcode::OK
        }
        _ => {
            if !quiet_requested(args) {
                let _ = err.print();
            }
            exitcode::INVALID_INPUT
        }
    }
}

/// Read file paths from a reader, one per line, skipping blank lines
pub fn read_file_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(trimmed.to_string());
        }
    }
    Ok(files)
}

/// Files from the command line, or from stdin when none were given and
/// stdin is not a terminal
fn collect_files(cli: &Cli) -> Result<Vec<String>> {
    let files = cli.input_files();
    if !files.is_empty() {
        return Ok(files);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    tracing::debug!("reading file list from stdin");
    read_file_list(stdin.lock()).context("Failed to read file list from stdin")
}

/// Print a diagnostic to stderr
pub fn report_error(message: impl std::fmt::Display) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    tracing::debug!(
        algorithm = %cli.algorithm,
        format = ?cli.format,
        quiet = cli.quiet,
        "configuration"
    );

    let files = collect_files(&cli)?;
    if files.is_empty() {
        let err = ToolError::InvalidInput("No files to process".to_string());
        if !cli.quiet {
            report_error(&err);
        }
        return Ok(err.exit_code());
    }

    let result_set = process_files(&files, cli.algorithm)?;

    if !cli.quiet {
        for (record, err) in result_set.failures() {
            eprintln!(
                "{} {}: {}",
                "Error processing".red().bold(),
                record.file.input,
                err
            );
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        Renderer::new(cli.format)
            .render_to(&result_set, &mut out)
            .context("Failed to write results")?;
        out.flush().context("Failed to write results")?;
    }

    Ok(result_set.exit_code())
}
