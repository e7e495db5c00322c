//! Daily quote collection: vendor adapters and the row normalizer.
//!
//! The write-side pipeline is `fetch -> normalize -> save`: a
//! [`providers::QuoteSource`] returns raw vendor rows, and
//! [`normalize::normalize`] coerces them into canonical [`models::bar::DailyBar`]
//! values ready for persistence.

pub mod errors;
pub mod models;
pub mod normalize;
pub mod providers;
