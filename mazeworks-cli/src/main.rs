//! `mazeworks` binary.
//!
//! Carves a rectangular maze from the command-line dimensions and seed, then
//! prints the room grid (with the solved route when `--solve` is given).
//! A failed carve exits non-zero after logging the maze error code and, for
//! collection failures, the code of the structure that rejected the call.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mazeworks_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use mazeworks_core::{CollectionErrorCode, MazeErrorCode};
use tracing::{error, field};

fn carve_and_print() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to carve maze")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("failed to render maze")?;
    stdout.flush().context("failed to flush output")
}

/// Stable codes carried by a maze failure, if `err` is one.
fn maze_codes(err: &anyhow::Error) -> (Option<MazeErrorCode>, Option<CollectionErrorCode>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Maze(maze)) => (Some(maze.code()), maze.collection_code()),
        None => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = carve_and_print() else {
        return ExitCode::SUCCESS;
    };
    let (maze_code, collection_code) = maze_codes(&err);
    error!(
        error = %err,
        code = maze_code.map(|code| field::display(code.as_str())),
        collection_code = collection_code.map(|code| field::display(code.as_str())),
        "maze command failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until the subscriber installs"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("mazeworks: failed to initialize logging: {err}");
}
