//! Diesel models mapping to the database schema.
//!
//! These types mirror the two tables defined in the embedded migrations and
//! in [`crate::schema`]:
//! - [`crate::schema::assets`] — one row per tracked ticker, never deleted
//! - [`crate::schema::prices`] — one row per daily bar, replaced wholesale on
//!   each successful refresh

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::{assets, prices};

/// A row in [`crate::schema::assets`]: one tracked ticker.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = assets, check_for_backend(diesel::sqlite::Sqlite))]
pub struct Asset {
    /// Database primary key. Populated by the DB.
    pub id: i32,
    /// Ticker symbol, unique, stored uppercased.
    pub ticker: String,
}

/// Insertable form of [`Asset`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assets)]
pub struct NewAsset<'a> {
    /// Ticker symbol, trimmed and uppercased by the caller.
    pub ticker: &'a str,
}

/// A row in [`crate::schema::prices`]: one daily bar for an asset.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = prices, check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Asset))]
pub struct PriceRow {
    /// Database primary key.
    pub id: i32,
    /// FK to [`Asset::id`].
    pub asset_id: i32,
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open_price: f64,
    /// Daily high.
    pub high_price: f64,
    /// Daily low.
    pub low_price: f64,
    /// Closing price.
    pub close_price: f64,
    /// Shares traded.
    pub volume: i64,
}

/// Insertable form of [`PriceRow`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = prices)]
pub struct NewPriceRow {
    /// FK to [`Asset::id`].
    pub asset_id: i32,
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open_price: f64,
    /// Daily high.
    pub high_price: f64,
    /// Daily low.
    pub low_price: f64,
    /// Closing price.
    pub close_price: f64,
    /// Shares traded.
    pub volume: i64,
}
