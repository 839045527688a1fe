//! Forward wealth projection under periodic compounding.
//!
//! The annual rate converts to a monthly factor as a geometric twelfth
//! root, never as a simple division by twelve: twelve applications of the
//! factor must reproduce the stated annual rate exactly.

use serde::{Deserialize, Serialize};

use crate::{ContributionTiming, EngineError};

/// Validated inputs for a forward projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    start_amount: f64,
    years: u32,
    months: u32,
    annual_return_rate_pct: f64,
    contribution_amount: f64,
    timing: ContributionTiming,
}

impl ProjectionParameters {
    pub fn new(
        start_amount: f64,
        years: u32,
        months: u32,
        annual_return_rate_pct: f64,
        contribution_amount: f64,
        timing: ContributionTiming,
    ) -> Result<Self, EngineError> {
        if !start_amount.is_finite() {
            return Err(EngineError::NonFiniteValue {
                field: "start_amount",
            });
        }
        if start_amount < 0.0 {
            return Err(EngineError::NegativeValue {
                field: "start_amount",
            });
        }
        if !annual_return_rate_pct.is_finite() {
            return Err(EngineError::NonFiniteValue {
                field: "annual_return_rate",
            });
        }
        if annual_return_rate_pct < -100.0 {
            return Err(EngineError::RateBelowTotalLoss {
                rate: annual_return_rate_pct,
            });
        }
        if !contribution_amount.is_finite() {
            return Err(EngineError::NonFiniteValue {
                field: "contribution_amount",
            });
        }
        if contribution_amount < 0.0 {
            return Err(EngineError::NegativeValue {
                field: "contribution_amount",
            });
        }

        Ok(Self {
            start_amount,
            years,
            months,
            annual_return_rate_pct,
            contribution_amount,
            timing,
        })
    }

    pub const fn start_amount(&self) -> f64 {
        self.start_amount
    }

    pub const fn annual_return_rate_pct(&self) -> f64 {
        self.annual_return_rate_pct
    }

    pub const fn contribution_amount(&self) -> f64 {
        self.contribution_amount
    }

    pub const fn timing(&self) -> ContributionTiming {
        self.timing
    }

    /// Horizon in months; zero is valid and yields the seed-only trajectory.
    pub const fn total_months(&self) -> u32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }

    /// Exact monthly compounding factor equivalent to the annual rate.
    pub fn monthly_growth_factor(&self) -> f64 {
        (1.0 + self.annual_return_rate_pct / 100.0).powf(1.0 / 12.0)
    }
}

/// Month-indexed projected wealth, seed value included at index 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WealthTrajectory(Vec<f64>);

impl WealthTrajectory {
    /// Number of points, always `total_months + 1`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Wealth at the end of the horizon.
    pub fn final_value(&self) -> f64 {
        *self.0.last().expect("trajectory always holds the seed value")
    }

    pub fn months(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, wealth)| (index as u32, *wealth))
    }
}

/// Simulate month-by-month compounding with contributions.
///
/// `wealth[0]` is the seed; each later month multiplies by the monthly
/// growth factor and then adds that month's contribution. Monthly timing
/// contributes every month, yearly timing only on non-zero multiples of
/// twelve. Runs in time proportional to the horizon.
pub fn compute_projection(
    params: &ProjectionParameters,
) -> Result<WealthTrajectory, EngineError> {
    let total_months = params.total_months();
    let factor = params.monthly_growth_factor();

    let mut wealth = Vec::with_capacity(total_months as usize + 1);
    wealth.push(params.start_amount());

    for month in 1..=total_months {
        let contribution = match params.timing() {
            ContributionTiming::Monthly => params.contribution_amount(),
            ContributionTiming::Yearly if month % 12 == 0 => params.contribution_amount(),
            ContributionTiming::Yearly => 0.0,
        };

        let previous = wealth[month as usize - 1];
        wealth.push(previous * factor + contribution);
    }

    Ok(WealthTrajectory(wealth))
}
