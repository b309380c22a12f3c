//! cst - Command-line front end for heuristic statement completion

use std::process::ExitCode;

use complete_statement::cli;

fn main() -> ExitCode {
    cli::run()
}
