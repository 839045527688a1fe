//! Behavior-driven tests for the price-source boundary.
//!
//! These tests verify HOW requests are validated and HOW the synthetic
//! source materializes tables the valuation engine can consume directly.

use std::str::FromStr;

use folio_tests::{
    allocation, compute_valuation, date, ticker, PriceRequest, PriceSource, SourceErrorKind,
    SourceId, SyntheticSource,
};

// =============================================================================
// Request validation
// =============================================================================

#[test]
fn when_ticker_list_is_empty_request_is_rejected() {
    // Given: a user submitted the form with no holdings
    let result = PriceRequest::new(Vec::new(), date("2020-01-01"), date("2021-01-01"));

    // Then: a clear invalid-request error comes back
    let err = result.expect_err("empty tickers must fail");
    assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
    assert!(
        err.message().contains("ticker"),
        "error should mention tickers: {}",
        err.message()
    );
}

#[test]
fn when_window_does_not_move_forward_request_is_rejected() {
    let err = PriceRequest::new(
        vec![ticker("AAPL")],
        date("2021-01-01"),
        date("2021-01-01"),
    )
    .expect_err("degenerate window must fail");

    assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
}

#[test]
fn source_id_round_trips_through_strings() {
    for id in SourceId::ALL {
        let parsed = SourceId::from_str(id.as_str()).expect("must parse");
        assert_eq!(parsed, id);
    }

    let err = SourceId::from_str("bloomberg").expect_err("must fail");
    assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
}

// =============================================================================
// Synthetic source behavior
// =============================================================================

#[test]
fn synthetic_source_is_deterministic_per_request() {
    let request = PriceRequest::new(
        vec![ticker("AAPL"), ticker("MSFT")],
        date("2020-01-01"),
        date("2020-06-01"),
    )
    .expect("request must be valid");

    let first = SyntheticSource
        .daily_closes(&request)
        .expect("must produce data");
    let second = SyntheticSource
        .daily_closes(&request)
        .expect("must produce data");

    assert_eq!(first, second);
}

#[test]
fn synthetic_source_indexes_weekdays_only() {
    let request = PriceRequest::new(
        vec![ticker("AAPL")],
        date("2020-01-01"),
        date("2020-02-01"),
    )
    .expect("request must be valid");

    let table = SyntheticSource
        .daily_closes(&request)
        .expect("must produce data");

    // January 2020 has 23 weekdays.
    assert_eq!(table.len(), 23);
    for pair in table.dates().windows(2) {
        assert!(pair[0] < pair[1], "dates must be strictly increasing");
    }
}

#[test]
fn synthetic_source_prices_are_usable_divisors() {
    let request = PriceRequest::new(
        vec![ticker("AAPL"), ticker("VUSA.L")],
        date("2020-01-01"),
        date("2020-02-01"),
    )
    .expect("request must be valid");

    let table = SyntheticSource
        .daily_closes(&request)
        .expect("must produce data");

    for symbol in ["AAPL", "VUSA.L"] {
        let first = table
            .first_price(&ticker(symbol))
            .expect("column must exist");
        assert!(first > 0.0, "first close must be a valid divisor");
    }
}

#[test]
fn when_window_holds_no_weekdays_source_reports_no_data() {
    // Given: a Saturday-to-Sunday window
    let request = PriceRequest::new(
        vec![ticker("AAPL")],
        date("2020-01-04"),
        date("2020-01-06"),
    )
    .expect("request must be valid");

    let err = SyntheticSource
        .daily_closes(&request)
        .expect_err("must fail");
    assert_eq!(err.kind(), SourceErrorKind::NoData);
}

// =============================================================================
// End to end: source output feeds the valuation engine
// =============================================================================

#[test]
fn synthetic_table_valuates_end_to_end() {
    let request = PriceRequest::new(
        vec![ticker("AAPL"), ticker("MSFT")],
        date("2020-01-01"),
        date("2020-04-01"),
    )
    .expect("request must be valid");

    let table = SyntheticSource
        .daily_closes(&request)
        .expect("must produce data");
    let series = compute_valuation(
        &[allocation("AAPL", 1000.0), allocation("MSFT", 500.0)],
        &table,
    )
    .expect("valuation must succeed");

    assert_eq!(series.len(), table.len());
    // Day one is worth exactly the invested amounts.
    assert!((series.totals()[0] - 1500.0).abs() < 1e-9);
}
