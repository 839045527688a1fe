use crate::{EngineError, Ticker, TradingDate};

/// One ticker's aligned close-price column.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceColumn {
    ticker: Ticker,
    closes: Vec<f64>,
}

impl PriceColumn {
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }
}

/// Daily closing prices aligned on a shared, strictly increasing date index.
///
/// This is the materialized snapshot a price source hands to the valuation
/// engine; once constructed it is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<TradingDate>,
    columns: Vec<PriceColumn>,
}

impl PriceTable {
    /// Validate alignment and build the table.
    ///
    /// Every column must have exactly one close per index date, dates must
    /// be strictly increasing, and every price must be a finite
    /// non-negative number.
    pub fn new(
        dates: Vec<TradingDate>,
        columns: Vec<(Ticker, Vec<f64>)>,
    ) -> Result<Self, EngineError> {
        for pair in dates.windows(2) {
            if pair[0] >= pair[1] {
                return Err(EngineError::UnorderedDates);
            }
        }

        let columns = columns
            .into_iter()
            .map(|(ticker, closes)| {
                if closes.len() != dates.len() {
                    return Err(EngineError::MisalignedColumn {
                        ticker: ticker.as_str().to_owned(),
                        expected: dates.len(),
                        actual: closes.len(),
                    });
                }

                for (row, close) in closes.iter().enumerate() {
                    if !close.is_finite() || *close < 0.0 {
                        return Err(EngineError::InvalidPrice {
                            ticker: ticker.as_str().to_owned(),
                            row,
                        });
                    }
                }

                Ok(PriceColumn { ticker, closes })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dates, columns })
    }

    /// Number of date rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[TradingDate] {
        &self.dates
    }

    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.columns.iter().map(PriceColumn::ticker)
    }

    pub fn column(&self, ticker: &Ticker) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|column| column.ticker() == ticker)
            .map(PriceColumn::closes)
    }

    /// Close on the first index date, the divisor fixing implied quantity.
    pub fn first_price(&self, ticker: &Ticker) -> Option<f64> {
        self.column(ticker).and_then(|closes| closes.first().copied())
    }
}
