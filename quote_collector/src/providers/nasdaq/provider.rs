use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, header};

use crate::{
    errors::{ProviderInitError, SourceError},
    models::raw::RawRow,
    providers::{QuoteSource, nasdaq::response::HistoricalResponse},
};

const BASE_URL: &str = "https://api.nasdaq.com/api/quote";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ROW_LIMIT: &str = "9999";

// The endpoint rejects requests that do not look like they come from a
// browser on nasdaq.com.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches daily historical rows from `api.nasdaq.com`.
///
/// One GET per call, no retries, no rate limiting, no caching.
pub struct NasdaqProvider {
    client: Client,
    base_url: String,
}

impl NasdaqProvider {
    /// Creates a provider pointed at the public Nasdaq API.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a provider against an alternate base URL (local stub servers
    /// in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_static("https://www.nasdaq.com/"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QuoteSource for NasdaqProvider {
    async fn fetch_daily(
        &self,
        ticker: &str,
        lookback_years: u32,
    ) -> Result<Vec<RawRow>, SourceError> {
        let to_date = Utc::now().date_naive();
        let from_date = to_date - chrono::Duration::days(365 * i64::from(lookback_years));

        let url = format!("{}/{}/historical", self.base_url, ticker);
        let query = [
            ("assetclass", "stocks".to_string()),
            ("fromdate", from_date.format("%Y-%m-%d").to_string()),
            ("todate", to_date.format("%Y-%m-%d").to_string()),
            ("limit", ROW_LIMIT.to_string()),
        ];

        tracing::debug!(ticker, %from_date, %to_date, "requesting historical quotes");

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body: HistoricalResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Payload(e.to_string()))?;

        // A well-formed body without `data.tradesTable.rows` is the vendor's
        // way of saying "nothing in range", not an error.
        Ok(body.into_rows())
    }
}
