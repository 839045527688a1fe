mod backtest;
mod project;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::report::Report;

pub fn run(cli: &Cli) -> Result<Report<Value>, CliError> {
    match &cli.command {
        Command::Backtest(args) => backtest::run(args),
        Command::Project(args) => project::run(args),
    }
}
