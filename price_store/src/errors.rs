//! Typed errors for the persistence layer.
//!
//! Unlike the adapter and normalizer, the store fails loudly: silently losing
//! a write is worse than silently dropping one malformed input row.

use thiserror::Error;

/// Errors that can occur while touching the price history database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or tuned.
    #[error("database connection failed: {0}")]
    Connection(anyhow::Error),

    /// Embedded migrations failed to apply.
    #[error("migrations failed: {0}")]
    Migration(anyhow::Error),

    /// A query or transaction failed.
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}
