//! Defines the command-line arguments for the `kata` runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "kata",
    version,
    about = "Run the exercise suites through the describe/it harness."
)]
pub struct KataArgs {
    /// Also run the submission cases of every suite.
    #[arg(short = 's', long = "submit")]
    pub submit: bool,

    /// When to color the transcript.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Only run suites whose name contains this text.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
