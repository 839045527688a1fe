//! Form coercion boundary.
//!
//! Everything arriving here is an untyped string from an HTML form. This
//! module owns turning those into validated domain values; the engines
//! never see raw form input. Empty fields take the documented defaults,
//! malformed fields fail with a typed error, never a silent fallback.

use std::str::FromStr;

use serde::Deserialize;

use folio_core::{Allocation, ContributionTiming, ProjectionParameters, Ticker, TradingDate};
use folio_data::PriceRequest;

use crate::error::WebError;

pub const DEFAULT_START_DATE: &str = "2010-01-01";

/// Raw fields of the historical backtest form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StocksForm {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// One `TICKER AMOUNT` pair per line.
    #[serde(default)]
    pub holdings: String,
}

/// Typed result of coercing a [`StocksForm`].
#[derive(Debug, Clone)]
pub struct StocksInput {
    pub allocations: Vec<Allocation>,
    pub request: PriceRequest,
}

impl StocksForm {
    pub fn coerce(&self, today: TradingDate) -> Result<StocksInput, WebError> {
        let start_text = self.start_date.trim();
        let start = if start_text.is_empty() {
            TradingDate::parse(DEFAULT_START_DATE)?
        } else {
            TradingDate::parse(start_text)?
        };

        let end_text = self.end_date.trim();
        let end = if end_text.is_empty() {
            today
        } else {
            TradingDate::parse(end_text)?
        };

        let allocations = parse_holdings(&self.holdings)?;
        let tickers = allocations
            .iter()
            .map(|allocation| allocation.ticker().clone())
            .collect();
        let request = PriceRequest::new(tickers, start, end)?;

        Ok(StocksInput {
            allocations,
            request,
        })
    }
}

fn parse_holdings(text: &str) -> Result<Vec<Allocation>, WebError> {
    let mut allocations = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (Some(ticker), Some(amount), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(WebError::Form(format!(
                "holding line '{line}' must be 'TICKER AMOUNT'"
            )));
        };

        let ticker = Ticker::parse(ticker)?;
        let amount: f64 = amount.parse().map_err(|_| {
            WebError::Form(format!("amount '{amount}' is not a number"))
        })?;
        allocations.push(Allocation::new(ticker, amount)?);
    }

    if allocations.is_empty() {
        return Err(WebError::Form(String::from(
            "enter at least one ticker and amount",
        )));
    }

    Ok(allocations)
}

/// Raw fields of the forward projection form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectionForm {
    #[serde(default)]
    pub start_amount: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub months: String,
    #[serde(default)]
    pub annual_return_rate: String,
    #[serde(default)]
    pub contribution_amount: String,
    #[serde(default)]
    pub contribution_timing: String,
}

impl ProjectionForm {
    pub fn coerce(&self) -> Result<ProjectionParameters, WebError> {
        let start_amount = parse_f64("starting amount", &self.start_amount, 0.0)?;
        let years = parse_u32("years", &self.years, 0)?;
        let months = parse_u32("months", &self.months, 0)?;
        let rate = parse_f64("annual return rate", &self.annual_return_rate, 0.0)?;
        let contribution = parse_f64("contribution amount", &self.contribution_amount, 0.0)?;

        let timing_text = self.contribution_timing.trim();
        let timing = if timing_text.is_empty() {
            ContributionTiming::Monthly
        } else {
            ContributionTiming::from_str(timing_text)?
        };

        Ok(ProjectionParameters::new(
            start_amount,
            years,
            months,
            rate,
            contribution,
            timing,
        )?)
    }
}

fn parse_f64(field: &str, text: &str, default: f64) -> Result<f64, WebError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| WebError::Form(format!("{field} '{trimmed}' is not a number")))
}

fn parse_u32(field: &str, text: &str, default: u32) -> Result<u32, WebError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| WebError::Form(format!("{field} '{trimmed}' is not a whole number")))
}
