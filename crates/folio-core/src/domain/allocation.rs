use serde::{Deserialize, Serialize};

use crate::{EngineError, Ticker};

/// Money invested in one asset at the start of a historical window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    ticker: Ticker,
    amount: f64,
}

impl Allocation {
    /// Build an allocation, rejecting non-finite and non-positive amounts.
    pub fn new(ticker: Ticker, amount: f64) -> Result<Self, EngineError> {
        if !amount.is_finite() {
            return Err(EngineError::NonFiniteValue { field: "amount" });
        }
        if amount <= 0.0 {
            return Err(EngineError::NonPositiveAmount {
                ticker: ticker.as_str().to_owned(),
                amount,
            });
        }

        Ok(Self { ticker, amount })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

/// Collapse duplicate tickers, preserving first-occurrence order.
///
/// Repeating a ticker with the same amount is tolerated; repeating it with a
/// different amount is ambiguous and rejected.
pub fn consolidate(allocations: &[Allocation]) -> Result<Vec<Allocation>, EngineError> {
    if allocations.is_empty() {
        return Err(EngineError::EmptyAllocations);
    }

    let mut merged: Vec<Allocation> = Vec::with_capacity(allocations.len());
    for allocation in allocations {
        let seen = merged
            .iter()
            .find(|seen| seen.ticker() == allocation.ticker())
            .map(Allocation::amount);
        match seen {
            None => merged.push(allocation.clone()),
            Some(first) if first == allocation.amount() => {}
            Some(first) => {
                return Err(EngineError::ConflictingAllocation {
                    ticker: allocation.ticker().as_str().to_owned(),
                    first,
                    second: allocation.amount(),
                });
            }
        }
    }

    Ok(merged)
}
