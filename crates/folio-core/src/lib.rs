//! Core engines for folio.
//!
//! This crate contains:
//! - Canonical domain types and validation
//! - The historical valuation engine
//! - The forward projection engine
//!
//! Everything here is pure and synchronous: no I/O, no clock, no shared
//! state. Price data arrives as an immutable [`PriceTable`] snapshot built
//! by a collaborator.

pub mod domain;
pub mod error;
pub mod projection;
pub mod valuation;

pub use domain::{
    consolidate, Allocation, ContributionTiming, PriceColumn, PriceTable, Ticker, TradingDate,
};
pub use error::{EngineError, ErrorKind};
pub use projection::{compute_projection, ProjectionParameters, WealthTrajectory};
pub use valuation::{compute_valuation, ValuationSeries, ValueColumn};
