//! SQLite-backed persistence for daily price history.
//!
//! The write path performs a full replace-on-refresh: each successful save
//! for a ticker deletes that asset's prior bars and reinserts the new set in
//! one transaction. The read path matches tickers case-insensitively and
//! returns bars in date order.

#![deny(missing_docs)]

pub mod db;
pub mod errors;
pub mod models;
#[allow(missing_docs)]
pub mod schema;
pub mod store;
