//! Command layer for taskgen.
//!
//! Resolves the language identifier, runs the scaffold generator, prints the
//! user-facing diagnostics, and returns the process exit code. Embedders
//! wanting structured errors should call [`crate::generator::generate`]
//! directly instead.

use crate::cli::Cli;
use crate::exit_codes;
use crate::generator::{self, ScaffoldRequest};
use crate::registry::Language;

/// Run the scaffold generation described by the parsed CLI arguments.
///
/// Returns the exit code for the process. Unknown languages are rejected
/// before any filesystem side effects.
pub fn run(cli: Cli) -> i32 {
    let language = match cli.language.parse::<Language>() {
        Ok(language) => language,
        Err(err) => {
            println!("{}", err);
            return err.exit_code();
        }
    };

    let request = ScaffoldRequest {
        run_task_name: cli.name,
        working_dir: cli.dir,
        language,
    };

    match generator::generate(&request) {
        Ok(()) => {
            println!("Scaffold generated successfully");
            exit_codes::SUCCESS
        }
        Err(err) => {
            println!("Failed to generate {} scaffold: {}", language, err);
            err.exit_code()
        }
    }
}
