//! Price retrieval boundary for folio.
//!
//! The engines in `folio-core` consume a fully materialized
//! [`folio_core::PriceTable`]; this crate owns getting one. It defines the
//! [`PriceSource`] contract plus two implementations: a deterministic
//! offline generator and a Yahoo chart-API client.

pub mod source;
pub mod synthetic;
pub mod yahoo;

pub use source::{PriceRequest, PriceSource, SourceError, SourceErrorKind, SourceId};
pub use synthetic::SyntheticSource;
pub use yahoo::YahooSource;
