use serde::Deserialize;

/// One historical row exactly as the vendor returns it.
///
/// Every field is a string: dates arrive as `MM/DD/YYYY`, prices as
/// currency-prefixed comma-grouped strings (`"$1,234.50"`), and volume as a
/// comma-grouped integer string. Coercion into typed values is the
/// normalizer's job, not the adapter's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    /// Trading date, e.g. `"01/02/2024"`.
    pub date: String,
    /// Opening price, e.g. `"$10.00"`.
    pub open: String,
    /// Daily high, e.g. `"$11.00"`.
    pub high: String,
    /// Daily low, e.g. `"$9.50"`.
    pub low: String,
    /// Closing price, e.g. `"$10.50"`.
    pub close: String,
    /// Shares traded, e.g. `"1,000"`.
    pub volume: String,
}
