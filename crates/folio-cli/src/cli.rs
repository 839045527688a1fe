//! CLI argument definitions for folio.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Portfolio backtesting and projection from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Backtest a portfolio against daily closes or project future wealth"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value a historical portfolio over a date window.
    Backtest(BacktestArgs),
    /// Project future wealth under periodic compounding.
    Project(ProjectArgs),
}

#[derive(Debug, Args)]
pub struct BacktestArgs {
    /// Position as TICKER=AMOUNT; repeat the flag for each holding.
    #[arg(long = "holding", value_name = "TICKER=AMOUNT", required = true)]
    pub holdings: Vec<String>,

    /// Window start date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub start: String,

    /// Window end date (YYYY-MM-DD), exclusive.
    #[arg(long)]
    pub end: String,

    /// Price source the closes are materialized from.
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic)]
    pub source: SourceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Synthetic,
    Yahoo,
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Initial invested amount.
    #[arg(long)]
    pub start_amount: f64,

    /// Whole years in the horizon.
    #[arg(long, default_value_t = 0)]
    pub years: u32,

    /// Extra months on top of the years.
    #[arg(long, default_value_t = 0)]
    pub months: u32,

    /// Annual return rate in percent; negative values model losses.
    #[arg(long)]
    pub rate: f64,

    /// Amount added per contribution period.
    #[arg(long, default_value_t = 0.0)]
    pub contribution: f64,

    /// Contribution cadence: monthly or yearly.
    #[arg(long, default_value = "monthly")]
    pub timing: String,
}
