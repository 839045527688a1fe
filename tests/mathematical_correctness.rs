//! Mathematical properties of the valuation and projection engines.
//!
//! These tests pin down the arithmetic contracts: multiplier-based
//! valuation, geometric monthly compounding, and the contribution
//! schedules.

use folio_tests::{
    allocation, assert_close, compute_projection, compute_valuation, params, table,
    ContributionTiming,
};

// =============================================================================
// Valuation: multiplier arithmetic
// =============================================================================

#[test]
fn constant_prices_hold_the_allocated_amount() {
    // Given: a single position over a flat price series
    let prices = table(vec![("AAPL", vec![120.0; 5])]);

    // When: the portfolio is valued
    let series = compute_valuation(&[allocation("AAPL", 1000.0)], &prices)
        .expect("valuation must succeed");

    // Then: every row is exactly the amount invested
    assert_eq!(series.len(), 5);
    for value in series.totals() {
        assert_close(*value, 1000.0);
    }
}

#[test]
fn scaling_amounts_scales_values_linearly() {
    let prices = table(vec![
        ("AAPL", vec![100.0, 108.0, 97.0]),
        ("MSFT", vec![210.0, 220.0, 205.0]),
    ]);
    let base = [allocation("AAPL", 1000.0), allocation("MSFT", 500.0)];
    let scaled = [allocation("AAPL", 3000.0), allocation("MSFT", 1500.0)];

    let base_series = compute_valuation(&base, &prices).expect("valuation must succeed");
    let scaled_series = compute_valuation(&scaled, &prices).expect("valuation must succeed");

    for (base_total, scaled_total) in base_series.totals().iter().zip(scaled_series.totals()) {
        assert_close(*scaled_total, base_total * 3.0);
    }
}

#[test]
fn position_value_tracks_price_relative_to_first_close() {
    let prices = table(vec![("VUSA.L", vec![50.0, 55.0, 45.0, 60.0])]);
    let series = compute_valuation(&[allocation("VUSA.L", 200.0)], &prices)
        .expect("valuation must succeed");

    // 200 invested at 50 implies 4 units held throughout.
    let column = series.columns().first().expect("column must exist");
    assert_eq!(column.values(), &[200.0, 220.0, 180.0, 240.0]);
}

// =============================================================================
// Projection: compounding and contribution schedules
// =============================================================================

#[test]
fn zero_contribution_reduces_to_pure_compounding() {
    let p = params(2500.0, 3, 0, 7.0, 0.0, ContributionTiming::Monthly);
    let factor = p.monthly_growth_factor();

    let trajectory = compute_projection(&p).expect("projection must succeed");

    for (month, wealth) in trajectory.months() {
        assert_close(wealth, 2500.0 * factor.powi(month as i32));
    }
}

#[test]
fn zero_rate_with_monthly_timing_accumulates_linearly() {
    let trajectory = compute_projection(&params(
        1000.0,
        2,
        0,
        0.0,
        100.0,
        ContributionTiming::Monthly,
    ))
    .expect("projection must succeed");

    for (month, wealth) in trajectory.months() {
        assert_close(wealth, 1000.0 + f64::from(month) * 100.0);
    }
}

#[test]
fn yearly_timing_contributes_only_on_twelve_multiples() {
    let p = params(1000.0, 3, 0, 5.0, 600.0, ContributionTiming::Yearly);
    let factor = p.monthly_growth_factor();

    let trajectory = compute_projection(&p).expect("projection must succeed");
    let wealth = trajectory.values();

    for month in 1..wealth.len() {
        let grown = wealth[month - 1] * factor;
        if month % 12 == 0 {
            assert_close(wealth[month], grown + 600.0);
        } else {
            // Intermediate months are exactly factor growth, no deposit.
            assert_close(wealth[month], grown);
        }
    }
}

#[test]
fn zero_horizon_returns_only_the_seed() {
    let trajectory = compute_projection(&params(
        1000.0,
        0,
        0,
        7.0,
        100.0,
        ContributionTiming::Monthly,
    ))
    .expect("projection must succeed");

    assert_eq!(trajectory.values(), &[1000.0]);
}

#[test]
fn flat_year_keeps_thirteen_equal_points() {
    let trajectory = compute_projection(&params(
        1000.0,
        1,
        0,
        0.0,
        0.0,
        ContributionTiming::Monthly,
    ))
    .expect("projection must succeed");

    assert_eq!(trajectory.len(), 13);
    for (_, wealth) in trajectory.months() {
        assert_close(wealth, 1000.0);
    }
}

#[test]
fn twelve_monthly_factors_reproduce_the_annual_rate() {
    let p = params(1.0, 1, 0, 9.5, 0.0, ContributionTiming::Monthly);
    let trajectory = compute_projection(&p).expect("projection must succeed");

    assert_close(trajectory.final_value(), 1.095);
}
