//! The `kata` command-line interface.
//!
//! Parses arguments once, builds the [`RunConfig`], runs the selected exercise
//! suites against a console reporter and maps the outcome to an exit status
//! with [`exit_status`].

use std::process;

use clap::Parser;
use miette::{GraphicalReportHandler, GraphicalTheme};
use termcolor::StandardStream;

use crate::cli::args::KataArgs;
use crate::config::RunConfig;
use crate::errors::KataError;
use crate::exercises;
use crate::harness::Suite;
use crate::output::ConsoleReporter;
use crate::report::Summary;

pub mod args;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURES: i32 = 1;
pub const EXIT_MALFORMED: i32 = 2;

// Wide enough that help text is never wrapped mid-sentence.
const DIAGNOSTIC_WIDTH: usize = 200;

/// The main entry point for the CLI.
pub fn run() {
    let args = KataArgs::parse();
    let config = RunConfig::from(&args);

    let outcome = run_exercises(&config);
    if let Err(e) = &outcome {
        eprintln!("{}", render_fatal(e, config.use_colors));
    }
    process::exit(exit_status(&outcome));
}

/// Runs the selected suites, printing the transcript and summary to stdout.
pub fn run_exercises(config: &RunConfig) -> Result<Summary, KataError> {
    let stdout = StandardStream::stdout(config.color_choice());
    let mut suite = Suite::new(ConsoleReporter::new(stdout));
    exercises::run_selected(&mut suite, config)?;
    Ok(suite.finish().summary())
}

/// 0 when every case passed, 1 when any case failed, 2 when a suite was
/// malformed and the run stopped early.
pub fn exit_status(outcome: &Result<Summary, KataError>) -> i32 {
    match outcome {
        Ok(summary) if summary.has_failures() => EXIT_FAILURES,
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_MALFORMED,
    }
}

/// Renders an error that aborted the run as a miette diagnostic.
pub fn render_fatal(error: &KataError, use_colors: bool) -> String {
    let theme = if use_colors {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme).with_width(DIAGNOSTIC_WIDTH);
    let mut out = String::new();
    match handler.render_report(&mut out, error) {
        Ok(()) => out,
        Err(_) => format!("Error: {}", error),
    }
}
