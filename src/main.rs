//! TriMouse icon generator binary.
//!
//! Thin wrapper around the library: initialize logging, run the CLI,
//! and map the outcome onto a process exit code.

use std::process;
use trimouse_icongen::cli;
use trimouse_icongen::cli::OutputManager;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
