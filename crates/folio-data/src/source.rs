use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use folio_core::{PriceTable, Ticker, TradingDate};

/// Identifier of a price source implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Synthetic,
    Yahoo,
}

impl SourceId {
    pub const ALL: [Self; 2] = [Self::Synthetic, Self::Yahoo];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synthetic => "synthetic",
            Self::Yahoo => "yahoo",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "synthetic" => Ok(Self::Synthetic),
            "yahoo" => Ok(Self::Yahoo),
            other => Err(SourceError::invalid_request(format!(
                "invalid source '{other}', expected one of synthetic, yahoo"
            ))),
        }
    }
}

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    InvalidRequest,
    NoData,
    Unavailable,
    Malformed,
    Internal,
}

/// Structured error returned by price sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NoData,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Malformed,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::NoData => "source.no_data",
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Malformed => "source.malformed",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request for daily closes over `[start, end)`, one column per ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    tickers: Vec<Ticker>,
    start: TradingDate,
    end: TradingDate,
}

impl PriceRequest {
    /// Validate and build a request. Duplicate tickers collapse silently;
    /// an empty ticker list and a window that does not move forward are
    /// rejected.
    pub fn new(
        tickers: Vec<Ticker>,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Self, SourceError> {
        if tickers.is_empty() {
            return Err(SourceError::invalid_request(
                "price request must include at least one ticker",
            ));
        }
        if start >= end {
            return Err(SourceError::invalid_request(format!(
                "end date '{end}' must be after start date '{start}'"
            )));
        }

        let mut deduped: Vec<Ticker> = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            if !deduped.contains(&ticker) {
                deduped.push(ticker);
            }
        }

        Ok(Self {
            tickers: deduped,
            start,
            end,
        })
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub const fn start(&self) -> TradingDate {
        self.start
    }

    pub const fn end(&self) -> TradingDate {
        self.end
    }
}

/// Price source contract: materialize an aligned close-price table for a
/// request. Implementations are stateless snapshots of an external feed;
/// the caller owns the returned table.
pub trait PriceSource: Send + Sync {
    fn id(&self) -> SourceId;
    fn daily_closes(&self, req: &PriceRequest) -> Result<PriceTable, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(spec: &str) -> TradingDate {
        TradingDate::parse(spec).expect("date must parse")
    }

    fn ticker(symbol: &str) -> Ticker {
        Ticker::parse(symbol).expect("ticker must parse")
    }

    #[test]
    fn rejects_empty_ticker_list() {
        let err = PriceRequest::new(Vec::new(), date("2020-01-01"), date("2021-01-01"))
            .expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
    }

    #[test]
    fn rejects_inverted_window() {
        let err = PriceRequest::new(
            vec![ticker("AAPL")],
            date("2021-01-01"),
            date("2020-01-01"),
        )
        .expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
        assert!(err.message().contains("after start date"));
    }

    #[test]
    fn collapses_duplicate_tickers() {
        let request = PriceRequest::new(
            vec![ticker("AAPL"), ticker("MSFT"), ticker("AAPL")],
            date("2020-01-01"),
            date("2021-01-01"),
        )
        .expect("request must be valid");
        assert_eq!(request.tickers().len(), 2);
    }

    #[test]
    fn parses_source_id() {
        let id = SourceId::from_str(" Yahoo ").expect("must parse");
        assert_eq!(id, SourceId::Yahoo);
        let err = SourceId::from_str("bloomberg").expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
    }
}
