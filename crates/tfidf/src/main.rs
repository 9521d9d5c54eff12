//! Command-line interface for the `tfidf` vectorizer.

use std::{io, process::ExitCode};

use clap::Parser;
use tfidf::cli::{Cli, run};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to the default log level.
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::from_default_env().add_directive(log_level(cli.verbose).into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
