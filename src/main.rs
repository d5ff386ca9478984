#![forbid(unsafe_code)]

//! mdu — multithreaded disk-usage CLI entry point.

use std::process::ExitCode;

use clap::Parser;

mod cli_app;

fn main() -> ExitCode {
    let args = cli_app::Cli::parse();
    match cli_app::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("mdu: {e}");
            ExitCode::FAILURE
        }
    }
}
