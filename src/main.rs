//! Binary entrypoint for the roster CLI

use std::process::ExitCode;

use clap::Parser;

use roster::cli::Cli;
use roster::output;

fn main() -> ExitCode {
    match Cli::parse().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}
