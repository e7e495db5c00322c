use thiserror::Error;

/// Errors that can occur while fetching from a quote source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connect error, timeout, etc.).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor answered with a non-success HTTP status.
    #[error("quote API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

/// Errors that can occur while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
