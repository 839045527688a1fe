mod cli;
mod commands;
mod error;
mod output;
mod report;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let report = commands::run(&cli)?;
    output::render(&report, cli.format, cli.pretty)?;

    Ok(())
}
