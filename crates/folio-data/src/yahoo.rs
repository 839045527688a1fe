use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use folio_core::{PriceTable, Ticker, TradingDate};

use crate::source::{PriceRequest, PriceSource, SourceError, SourceId};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Yahoo v8 chart-API client for dividend/split-adjusted daily closes.
///
/// One GET per ticker; responses are normalized into per-ticker date maps
/// and intersected on their common trading days before table construction.
/// Gaps are never interpolated: a ticker that does not cover the shared
/// index simply shrinks it, and an empty intersection is a no-data error.
#[derive(Debug, Clone)]
pub struct YahooSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooSource {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| SourceError::internal(error.to_string()))?;

        Ok(Self {
            client,
            base_url: String::from(DEFAULT_BASE_URL),
        })
    }

    /// Point the client at a different host. Test hook.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn fetch_column(
        &self,
        ticker: &Ticker,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<BTreeMap<TradingDate, f64>, SourceError> {
        let url = format!(
            "{base}/v8/finance/chart/{ticker}?period1={p1}&period2={p2}&interval=1d&events=history",
            base = self.base_url,
            p1 = unix_midnight(start),
            p2 = unix_midnight(end),
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|error| SourceError::unavailable(error.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::no_data(format!(
                "yahoo has no chart data for '{ticker}'"
            )));
        }
        if !status.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo chart request for '{ticker}' failed with status {status}"
            )));
        }

        let payload: ChartResponse = response
            .json()
            .map_err(|error| SourceError::malformed(error.to_string()))?;

        normalize_column(ticker, payload)
    }
}

impl PriceSource for YahooSource {
    fn id(&self) -> SourceId {
        SourceId::Yahoo
    }

    fn daily_closes(&self, req: &PriceRequest) -> Result<PriceTable, SourceError> {
        let per_ticker = req
            .tickers()
            .iter()
            .map(|ticker| {
                self.fetch_column(ticker, req.start(), req.end())
                    .map(|column| (ticker.clone(), column))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let index = shared_index(&per_ticker);
        if index.is_empty() {
            return Err(SourceError::no_data(format!(
                "no common trading days between {} and {} for the requested tickers",
                req.start(),
                req.end()
            )));
        }

        let columns = per_ticker
            .into_iter()
            .map(|(ticker, column)| {
                let closes = index
                    .iter()
                    .map(|date| column[date])
                    .collect::<Vec<f64>>();
                (ticker, closes)
            })
            .collect();

        PriceTable::new(index, columns)
            .map_err(|error| SourceError::internal(error.to_string()))
    }
}

/// Dates present in every ticker's column, ascending.
fn shared_index(per_ticker: &[(Ticker, BTreeMap<TradingDate, f64>)]) -> Vec<TradingDate> {
    let Some((_, first)) = per_ticker.first() else {
        return Vec::new();
    };

    first
        .keys()
        .filter(|date| {
            per_ticker[1..]
                .iter()
                .all(|(_, column)| column.contains_key(date))
        })
        .copied()
        .collect()
}

fn unix_midnight(date: TradingDate) -> i64 {
    date.into_inner().midnight().assume_utc().unix_timestamp()
}

fn normalize_column(
    ticker: &Ticker,
    payload: ChartResponse,
) -> Result<BTreeMap<TradingDate, f64>, SourceError> {
    if let Some(error) = payload.chart.error {
        return Err(SourceError::no_data(format!(
            "yahoo rejected '{ticker}': {} ({})",
            error.description, error.code
        )));
    }

    let result = payload
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| {
            SourceError::malformed(format!("yahoo chart payload for '{ticker}' has no result"))
        })?;

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result.indicators.closes().ok_or_else(|| {
        SourceError::malformed(format!(
            "yahoo chart payload for '{ticker}' has no close series"
        ))
    })?;

    if timestamps.len() != closes.len() {
        return Err(SourceError::malformed(format!(
            "yahoo chart payload for '{ticker}' has {} timestamps but {} closes",
            timestamps.len(),
            closes.len()
        )));
    }

    let mut column = BTreeMap::new();
    for (ts, close) in timestamps.into_iter().zip(closes) {
        // Null closes mark non-trading rows; skip them rather than guess.
        let Some(close) = close else { continue };

        let date = time::OffsetDateTime::from_unix_timestamp(ts)
            .map_err(|_| {
                SourceError::malformed(format!(
                    "yahoo chart payload for '{ticker}' has out-of-range timestamp {ts}"
                ))
            })?
            .date();
        column.insert(TradingDate::from_date(date), close);
    }

    if column.is_empty() {
        return Err(SourceError::no_data(format!(
            "yahoo returned no usable rows for '{ticker}'"
        )));
    }

    Ok(column)
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartPayload,
}

#[derive(Debug, Deserialize)]
struct ChartPayload {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    adjclose: Vec<AdjCloseBlock>,
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

impl ChartIndicators {
    /// Prefer adjusted closes; fall back to raw closes.
    fn closes(self) -> Option<Vec<Option<f64>>> {
        self.adjclose
            .into_iter()
            .next()
            .map(|block| block.adjclose)
            .or_else(|| self.quote.into_iter().next().map(|block| block.close))
    }
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    adjclose: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Vec<Option<f64>>,
}
