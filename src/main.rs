//! sample-tool - reference implementation of the file-scoring CLI convention
//!
//! Every tool following the convention:
//! - Accepts `-q`, `-a <algorithm>`, `-v` and a list of files
//! - Prints `path: score` lines (or json/jsonl/csv)
//! - Reports the outcome with exit codes 0-4

use clap::Parser;
use std::io::IsTerminal;

mod cli;
mod core;
mod exitcode;
mod logging;
mod process;
mod scoring;

fn main() {
    let args: Vec<_> = std::env::args_os().collect();

    let cli = match cli::Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => std::process::exit(cli::handle_parse_error(err, &args)),
    };

    let color = !cli.no_color && std::io::stderr().is_terminal();
    colored::control::set_override(color);
    logging::setup_logging(cli.quiet, cli.verbose, color);

    let quiet = cli.quiet;
    let code = match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            if !quiet {
                cli::report_error(format!("{:#}", err));
            }
            exitcode::GENERAL
        }
    };

    std::process::exit(code);
}
