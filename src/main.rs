//! Taskgen: scaffolding generator for run task service projects.
//!
//! This is the main entry point for the `taskgen` CLI. It parses arguments,
//! runs the scaffold generator, and maps the outcome to an exit code.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod registry;
pub mod template;
pub mod toolchain;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    ExitCode::from(commands::run(cli) as u8)
}
