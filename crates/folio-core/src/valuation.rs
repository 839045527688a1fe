//! Historical portfolio valuation.
//!
//! Given a set of allocations and a materialized price table, fixes the
//! implied quantity bought at the window start (amount divided by first
//! close) and scales every later close by it.

use serde::Serialize;

use crate::{consolidate, Allocation, EngineError, PriceTable, Ticker, TradingDate};

/// One position's value series, labelled to avoid collision with price
/// columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueColumn {
    ticker: Ticker,
    label: String,
    values: Vec<f64>,
}

impl ValueColumn {
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Derived valuation result: per-position value columns plus the row-wise
/// portfolio total, on the price table's date index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationSeries {
    dates: Vec<TradingDate>,
    columns: Vec<ValueColumn>,
    totals: Vec<f64>,
}

impl ValuationSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[TradingDate] {
        &self.dates
    }

    pub fn columns(&self) -> &[ValueColumn] {
        &self.columns
    }

    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    pub fn column(&self, ticker: &Ticker) -> Option<&ValueColumn> {
        self.columns.iter().find(|column| column.ticker() == ticker)
    }
}

/// Compute the value of each position and the total portfolio over the
/// table's date index.
///
/// Fails fast before any arithmetic: empty allocations, an empty table, a
/// ticker without a price column, and a non-positive first close are all
/// rejected. Deterministic and side-effect free.
pub fn compute_valuation(
    allocations: &[Allocation],
    prices: &PriceTable,
) -> Result<ValuationSeries, EngineError> {
    let positions = consolidate(allocations)?;

    if prices.is_empty() {
        return Err(EngineError::EmptyDateRange);
    }

    let mut columns = Vec::with_capacity(positions.len());
    for position in &positions {
        let ticker = position.ticker();
        let closes = prices
            .column(ticker)
            .ok_or_else(|| EngineError::MissingPriceColumn {
                ticker: ticker.as_str().to_owned(),
            })?;

        let first = closes[0];
        if first <= 0.0 {
            return Err(EngineError::UnusableFirstPrice {
                ticker: ticker.as_str().to_owned(),
                price: first,
            });
        }

        // Implied quantity held from the first trading day onward.
        let multiplier = position.amount() / first;
        let values = closes.iter().map(|close| multiplier * close).collect();

        columns.push(ValueColumn {
            ticker: ticker.clone(),
            label: format!("{ticker}_value"),
            values,
        });
    }

    let totals = (0..prices.len())
        .map(|row| {
            columns
                .iter()
                .map(|column| column.values[row])
                .sum::<f64>()
        })
        .collect();

    Ok(ValuationSeries {
        dates: prices.dates().to_vec(),
        columns,
        totals,
    })
}
