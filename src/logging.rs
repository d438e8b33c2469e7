//! Logging setup
//!
//! Diagnostic logs go to stderr through `tracing`. Quiet mode installs no
//! subscriber, so nothing is logged at all.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Level used when RUST_LOG is not set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

pub fn setup_logging(quiet: bool, verbose: bool, ansi: bool) {
    if quiet {
        return;
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_thread_names(false)
        .with_ansi(ansi)
        .without_time();

    if let Err(e) = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .try_init()
    {
        eprintln!("Failed to set up logging: {}", e);
    }
}
