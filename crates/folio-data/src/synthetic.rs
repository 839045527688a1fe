use time::Weekday;

use folio_core::{PriceTable, Ticker, TradingDate};

use crate::source::{PriceRequest, PriceSource, SourceError, SourceId};

/// Deterministic offline price source.
///
/// Generates a weekday-only close path per ticker from a seed folded out
/// of the ticker bytes. The same request always yields the same table,
/// which is what tests, demos, and the CLI default rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticSource;

impl PriceSource for SyntheticSource {
    fn id(&self) -> SourceId {
        SourceId::Synthetic
    }

    fn daily_closes(&self, req: &PriceRequest) -> Result<PriceTable, SourceError> {
        let dates = weekdays_between(req.start(), req.end());
        if dates.is_empty() {
            return Err(SourceError::no_data(format!(
                "no trading days between {} and {}",
                req.start(),
                req.end()
            )));
        }

        let columns = req
            .tickers()
            .iter()
            .map(|ticker| {
                let seed = ticker_seed(ticker);
                let base = 40.0 + (seed % 1_200) as f64 / 10.0;
                let closes = (0..dates.len())
                    .map(|index| base + ((seed + index as u64 * 7) % 230) as f64 / 10.0)
                    .collect();
                (ticker.clone(), closes)
            })
            .collect();

        PriceTable::new(dates, columns)
            .map_err(|error| SourceError::internal(error.to_string()))
    }
}

/// Calendar weekdays in `[start, end)`.
fn weekdays_between(start: TradingDate, end: TradingDate) -> Vec<TradingDate> {
    let mut dates = Vec::new();
    let mut day = start.into_inner();
    while day < end.into_inner() {
        if !matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday) {
            dates.push(TradingDate::from_date(day));
        }
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}

fn ticker_seed(ticker: &Ticker) -> u64 {
    ticker.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}
