//! Provider abstraction for historical quote sources.
//!
//! [`QuoteSource`] is the seam between the pipeline and any concrete vendor
//! adapter. Fetch failures are typed ([`SourceError`]); callers that want the
//! fail-soft behavior of the write pipeline use
//! [`QuoteSource::fetch_daily_or_empty`], which degrades any failure to an
//! empty batch so a vendor outage never takes the caller down with it.

pub mod nasdaq;

use async_trait::async_trait;

use crate::{errors::SourceError, models::raw::RawRow};

/// A source of raw daily historical quote rows.
#[async_trait]
pub trait QuoteSource {
    /// Fetches raw rows for `ticker` over `[today - 365 * lookback_years, today]`.
    ///
    /// The ticker is expected to be trimmed and uppercased by the caller; the
    /// source does not validate its syntax.
    async fn fetch_daily(
        &self,
        ticker: &str,
        lookback_years: u32,
    ) -> Result<Vec<RawRow>, SourceError>;

    /// Fail-soft variant of [`fetch_daily`](QuoteSource::fetch_daily): any
    /// source error is logged and absorbed into an empty result, so the
    /// pipeline degrades to "no new data" instead of failing.
    async fn fetch_daily_or_empty(&self, ticker: &str, lookback_years: u32) -> Vec<RawRow> {
        match self.fetch_daily(ticker, lookback_years).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(ticker, error = %e, "quote fetch failed, treating as no data");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;
    struct FailingSource;

    #[async_trait]
    impl QuoteSource for EmptySource {
        async fn fetch_daily(&self, _: &str, _: u32) -> Result<Vec<RawRow>, SourceError> {
            Ok(vec![])
        }
    }

    #[async_trait]
    impl QuoteSource for FailingSource {
        async fn fetch_daily(&self, _: &str, _: u32) -> Result<Vec<RawRow>, SourceError> {
            Err(SourceError::Status(reqwest::StatusCode::FORBIDDEN))
        }
    }

    #[tokio::test]
    async fn fail_soft_fetch_absorbs_source_errors() {
        let rows = FailingSource.fetch_daily_or_empty("AAPL", 1).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn fail_soft_fetch_passes_through_success() {
        let rows = EmptySource.fetch_daily_or_empty("AAPL", 1).await;
        assert!(rows.is_empty());

        // Works through dynamic dispatch as well.
        let source: Box<dyn QuoteSource + Send + Sync> = Box::new(EmptySource);
        assert!(source.fetch_daily("AAPL", 1).await.unwrap().is_empty());
    }
}
