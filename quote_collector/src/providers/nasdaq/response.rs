//! Wire shape of the Nasdaq historical-quotes response.
//!
//! The payload nests the rows under `data.tradesTable.rows`; each level can
//! be missing or null when the ticker is unknown or the range is empty.

use serde::Deserialize;

use crate::models::raw::RawRow;

#[derive(Debug, Default, Deserialize)]
pub struct HistoricalResponse {
    #[serde(default)]
    pub data: Option<HistoricalData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoricalData {
    #[serde(rename = "tradesTable", default)]
    pub trades_table: Option<TradesTable>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TradesTable {
    #[serde(default)]
    pub rows: Option<Vec<RawRow>>,
}

impl HistoricalResponse {
    /// Extracts the raw rows, treating any missing level as an empty result.
    pub fn into_rows(self) -> Vec<RawRow> {
        self.data
            .and_then(|d| d.trades_table)
            .and_then(|t| t.rows)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let body = serde_json::json!({
            "data": {
                "tradesTable": {
                    "rows": [
                        {
                            "date": "01/02/2024",
                            "open": "$10.00",
                            "high": "$11.00",
                            "low": "$9.50",
                            "close": "$10.50",
                            "volume": "1,000"
                        }
                    ]
                }
            },
            "status": { "rCode": 200 }
        });

        let response: HistoricalResponse = serde_json::from_value(body).unwrap();
        let rows = response.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "01/02/2024");
        assert_eq!(rows[0].volume, "1,000");
    }

    #[test]
    fn missing_levels_yield_no_rows() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({ "data": null }),
            serde_json::json!({ "data": {} }),
            serde_json::json!({ "data": { "tradesTable": null } }),
            serde_json::json!({ "data": { "tradesTable": { "rows": null } } }),
        ] {
            let response: HistoricalResponse = serde_json::from_value(body).unwrap();
            assert!(response.into_rows().is_empty());
        }
    }
}
