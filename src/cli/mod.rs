//! Command line interface for trimouse_icongen.
//!
//! Argument parsing, colored output, and the glue between the two and
//! the generator pipeline.

mod args;
mod commands;
mod output;

pub use args::{Args, PlatformArg, StyleArg};
pub use commands::execute;
pub use output::OutputManager;

use crate::generator::Result;

/// Main CLI entry point.
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args)
}
