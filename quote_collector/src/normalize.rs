//! Converts raw vendor rows into canonical daily bars.
//!
//! The vendor payload is heterogeneous: currency-prefixed prices, grouped
//! volume strings, occasional blank fields, and the odd row that is simply
//! malformed. Coercion is tolerant per row and strict per batch: a field that
//! cannot be made sense of drops its row, the rest of the batch proceeds.

use crate::models::{bar::DailyBar, raw::RawRow};

/// Outcome of normalizing one vendor batch.
///
/// This is a discriminated partial result: `bars` holds the rows that
/// survived coercion, `dropped` counts the rows that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    /// Canonical bars, sorted ascending by ISO date.
    pub bars: Vec<DailyBar>,
    /// Number of vendor rows excluded during coercion.
    pub dropped: usize,
}

/// Normalizes a batch of raw vendor rows for `ticker`.
///
/// Rows whose date does not split into exactly three `/`-separated parts, or
/// whose numeric fields fail to parse after stripping `$` and `,`, are
/// dropped. Empty numeric fields coerce to zero. The surviving bars are
/// sorted ascending by their `YYYY-MM-DD` date string.
pub fn normalize(ticker: &str, raw_rows: &[RawRow]) -> NormalizedBatch {
    let mut bars = Vec::with_capacity(raw_rows.len());
    let mut dropped = 0usize;

    for row in raw_rows {
        match normalize_row(ticker, row) {
            Some(bar) => bars.push(bar),
            None => {
                dropped += 1;
                tracing::debug!(ticker, date = %row.date, "dropping malformed vendor row");
            }
        }
    }

    // Fixed-width ISO dates make lexical order chronological order.
    bars.sort_by(|a, b| a.date.cmp(&b.date));

    NormalizedBatch { bars, dropped }
}

fn normalize_row(ticker: &str, row: &RawRow) -> Option<DailyBar> {
    Some(DailyBar {
        ticker: ticker.to_string(),
        date: iso_date(&row.date)?,
        open: parse_price(&row.open)?,
        high: parse_price(&row.high)?,
        low: parse_price(&row.low)?,
        close: parse_price(&row.close)?,
        volume: parse_volume(&row.volume)?,
    })
}

/// `MM/DD/YYYY` -> `YYYY-MM-DD`, zero-padding month and day.
fn iso_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    Some(format!("{year}-{month:0>2}-{day:0>2}"))
}

/// Strips `$` and `,`; an empty remainder is zero, a non-numeric one is an
/// unusable row.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse().ok()
}

fn parse_volume(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Some(0);
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(date: &str, open: &str, high: &str, low: &str, close: &str, volume: &str) -> RawRow {
        RawRow {
            date: date.to_string(),
            open: open.to_string(),
            high: high.to_string(),
            low: low.to_string(),
            close: close.to_string(),
            volume: volume.to_string(),
        }
    }

    #[test]
    fn empty_and_symbol_only_prices_coerce_to_zero() {
        assert_eq!(parse_price(""), Some(0.0));
        assert_eq!(parse_price("$"), Some(0.0));
        assert_eq!(parse_price("1,234.50"), Some(1234.50));
        assert_eq!(parse_price("$1,234.50"), Some(1234.50));
        assert_eq!(parse_price("n/a"), None);
    }

    #[test]
    fn empty_volume_coerces_to_zero() {
        assert_eq!(parse_volume(""), Some(0));
        assert_eq!(parse_volume("1,000"), Some(1000));
        assert_eq!(parse_volume("--"), None);
    }

    #[test]
    fn bad_date_split_drops_the_row() {
        let rows = vec![
            raw("01/02/2024", "$10.00", "$11.00", "$9.50", "$10.50", "1,000"),
            raw("2024-01-03", "$10.00", "$11.00", "$9.50", "$10.50", "1,000"),
            raw("01/04", "$10.00", "$11.00", "$9.50", "$10.50", "1,000"),
        ];

        let batch = normalize("X", &rows);
        assert_eq!(batch.bars.len(), 1);
        assert_eq!(batch.dropped, 2);
        assert_eq!(batch.bars[0].date, "2024-01-02");
    }

    #[test]
    fn non_numeric_field_drops_the_row() {
        let rows = vec![
            raw("01/02/2024", "oops", "$11.00", "$9.50", "$10.50", "1,000"),
            raw("01/03/2024", "$10.00", "$11.00", "$9.50", "$10.50", "N/A"),
            raw("01/04/2024", "$10.00", "$11.00", "$9.50", "$10.50", "1,000"),
        ];

        let batch = normalize("X", &rows);
        assert_eq!(batch.bars.len(), 1);
        assert_eq!(batch.dropped, 2);
        assert_eq!(batch.bars[0].date, "2024-01-04");
    }

    #[test]
    fn single_digit_month_and_day_are_zero_padded() {
        let rows = vec![raw("1/2/2024", "$10.00", "$11.00", "$9.50", "$10.50", "1,000")];

        let batch = normalize("X", &rows);
        assert_eq!(batch.bars[0].date, "2024-01-02");
    }

    #[test]
    fn sample_row_normalizes_end_to_end() {
        let rows = vec![raw("01/02/2024", "$10.00", "$11.00", "$9.50", "$10.50", "1,000")];

        let batch = normalize("X", &rows);
        assert_eq!(batch.dropped, 0);
        assert_eq!(
            batch.bars,
            vec![DailyBar {
                ticker: "X".to_string(),
                date: "2024-01-02".to_string(),
                open: 10.0,
                high: 11.0,
                low: 9.5,
                close: 10.5,
                volume: 1000,
            }]
        );
    }

    proptest! {
        #[test]
        fn output_is_sorted_for_any_input_permutation(
            dates in proptest::collection::vec((1u32..=12, 1u32..=28, 2000i32..=2030), 1..40)
        ) {
            let rows: Vec<RawRow> = dates
                .iter()
                .map(|(m, d, y)| raw(&format!("{m}/{d}/{y}"), "$1.00", "$2.00", "$0.50", "$1.50", "100"))
                .collect();

            let batch = normalize("TEST", &rows);
            prop_assert_eq!(batch.bars.len(), rows.len());
            prop_assert!(batch.bars.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }
}
