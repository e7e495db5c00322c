//! The store object: full-replace writes and case-insensitive reads.

use chrono::NaiveDate;
use diesel::prelude::*;
use quote_collector::models::bar::DailyBar;
use serde::Serialize;

use crate::{
    db::{connection::connect_sqlite, migrate},
    errors::StoreError,
    models::{Asset, NewAsset, NewPriceRow, PriceRow},
    schema::{assets, prices},
};

mod functions {
    diesel::define_sql_function! {
        /// SQL `lower()`, used for case-insensitive ticker matching.
        fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
    }
}

use functions::lower;

/// Handle to the price history database.
///
/// Constructed with a database URL and passed explicitly to every component
/// that needs persistence; there is no ambient global connection. Each
/// operation opens its own tuned connection, so every call is a scoped
/// session that is released on all exit paths.
///
/// Known limitation: two concurrent refreshes of the *same* ticker are not
/// isolated against each other beyond SQLite's own transaction locking.
/// Refreshes of different tickers are independent.
#[derive(Debug, Clone)]
pub struct PriceStore {
    database_url: String,
}

/// One daily bar as exposed to readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceView {
    /// Trading date (serializes as `YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: i64,
}

impl From<PriceRow> for PriceView {
    fn from(row: PriceRow) -> Self {
        Self {
            date: row.date,
            open: row.open_price,
            high: row.high_price,
            low: row.low_price,
            close: row.close_price,
            volume: row.volume,
        }
    }
}

impl PriceStore {
    /// Creates a store handle for the database at `database_url`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Applies any pending embedded migrations.
    pub fn migrate(&self) -> Result<(), StoreError> {
        migrate::run_sqlite(&self.database_url).map_err(StoreError::Migration)
    }

    fn connect(&self) -> Result<SqliteConnection, StoreError> {
        connect_sqlite(&self.database_url).map_err(StoreError::Connection)
    }

    /// Replaces the stored price history for the bars' ticker.
    ///
    /// An empty input is a no-op (returns 0, creates nothing). Otherwise the
    /// ticker is taken from the first bar (one call is assumed to carry one
    /// ticker), and in a single transaction: the asset is found or inserted,
    /// its prior price rows are deleted, and the new set is bulk-inserted.
    /// Bars whose ISO date fails to parse are skipped; the normalizer should
    /// already have guaranteed valid dates.
    ///
    /// Returns the number of rows inserted. Persistence failures propagate.
    pub fn save(&self, bars: &[DailyBar]) -> Result<usize, StoreError> {
        let Some(first) = bars.first() else {
            tracing::debug!("save called with no rows, nothing to do");
            return Ok(0);
        };
        let symbol = first.ticker.as_str();

        let mut conn = self.connect()?;
        let inserted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            let existing: Option<Asset> = assets::table
                .filter(assets::ticker.eq(symbol))
                .first(conn)
                .optional()?;

            let asset_id = match existing {
                Some(asset) => {
                    diesel::delete(prices::table.filter(prices::asset_id.eq(asset.id)))
                        .execute(conn)?;
                    asset.id
                }
                None => diesel::insert_into(assets::table)
                    .values(NewAsset { ticker: symbol })
                    .returning(assets::id)
                    .get_result(conn)?,
            };

            let rows: Vec<NewPriceRow> = bars
                .iter()
                .filter_map(|bar| {
                    let date = NaiveDate::parse_from_str(&bar.date, "%Y-%m-%d").ok()?;
                    Some(NewPriceRow {
                        asset_id,
                        date,
                        open_price: bar.open,
                        high_price: bar.high,
                        low_price: bar.low,
                        close_price: bar.close,
                        volume: bar.volume,
                    })
                })
                .collect();

            if rows.is_empty() {
                return Ok(0);
            }
            diesel::insert_into(prices::table).values(&rows).execute(conn)
        })?;

        tracing::info!(ticker = symbol, rows = inserted, "replaced price history");
        Ok(inserted)
    }

    /// Reads all stored bars for `ticker`, matched case-insensitively,
    /// ordered ascending by date.
    ///
    /// Returns `None` for a blank ticker or a ticker with no asset row; that
    /// outcome is distinct from an asset with zero bars (`Some(vec![])`).
    pub fn get_prices(&self, ticker: &str) -> Result<Option<Vec<PriceView>>, StoreError> {
        let wanted = ticker.trim();
        if wanted.is_empty() {
            return Ok(None);
        }

        let mut conn = self.connect()?;
        let asset: Option<Asset> = assets::table
            .filter(lower(assets::ticker).eq(wanted.to_lowercase()))
            .first(&mut conn)
            .optional()?;

        let Some(asset) = asset else {
            return Ok(None);
        };

        let rows: Vec<PriceRow> = PriceRow::belonging_to(&asset)
            .order(prices::date.asc())
            .load(&mut conn)?;

        Ok(Some(rows.into_iter().map(PriceView::from).collect()))
    }
}
