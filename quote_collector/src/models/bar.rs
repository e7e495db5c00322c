//! Canonical in-memory representation of one daily price bar.

/// A single normalized daily bar (OHLCV) for one ticker.
///
/// This struct is vendor-agnostic and is the unit handed from the normalizer
/// to the store. The date is kept as a fixed-width ISO-8601 string
/// (`YYYY-MM-DD`), so lexical ordering equals chronological ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    /// Ticker symbol this bar belongs to (trimmed, uppercased by the caller).
    pub ticker: String,

    /// Calendar date in ISO-8601 `YYYY-MM-DD` form.
    pub date: String,

    /// Opening price.
    pub open: f64,

    /// Highest price of the day.
    pub high: f64,

    /// Lowest price of the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the day.
    pub volume: i64,
}
