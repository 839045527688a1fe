use std::time::Instant;

use serde_json::Value;

use folio_core::{compute_valuation, Allocation, Ticker, TradingDate};
use folio_data::{PriceRequest, PriceSource, SyntheticSource, YahooSource};

use crate::cli::{BacktestArgs, SourceKind};
use crate::error::CliError;
use crate::report::Report;

pub fn run(args: &BacktestArgs) -> Result<Report<Value>, CliError> {
    let allocations = args
        .holdings
        .iter()
        .map(|spec| parse_holding(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let start = TradingDate::parse(&args.start)?;
    let end = TradingDate::parse(&args.end)?;
    let tickers = allocations
        .iter()
        .map(|allocation| allocation.ticker().clone())
        .collect();
    let request = PriceRequest::new(tickers, start, end)?;

    let source: Box<dyn PriceSource> = match args.source {
        SourceKind::Synthetic => Box::new(SyntheticSource),
        SourceKind::Yahoo => Box::new(YahooSource::new()?),
    };

    let started = Instant::now();
    let prices = source.daily_closes(&request)?;
    let latency_ms = started.elapsed().as_millis() as u64;

    let series = compute_valuation(&allocations, &prices)?;

    let mut report = Report::new(serde_json::to_value(&series)?)
        .with_source(source.id())
        .with_latency(latency_ms);
    if series.len() == 1 {
        report = report.with_warning("window covers a single trading day");
    }

    Ok(report)
}

fn parse_holding(spec: &str) -> Result<Allocation, CliError> {
    let (ticker, amount) = spec.split_once('=').ok_or_else(|| {
        CliError::Command(format!("holding '{spec}' must be TICKER=AMOUNT"))
    })?;

    let ticker = Ticker::parse(ticker)?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| CliError::Command(format!("amount '{amount}' is not a number")))?;

    Ok(Allocation::new(ticker, amount)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_holding_spec() {
        let allocation = parse_holding("aapl=1000").expect("must parse");
        assert_eq!(allocation.ticker().as_str(), "AAPL");
        assert_eq!(allocation.amount(), 1000.0);
    }

    #[test]
    fn rejects_holding_without_separator() {
        let err = parse_holding("AAPL 1000").expect_err("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = parse_holding("AAPL=lots").expect_err("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }
}
