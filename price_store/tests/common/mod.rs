#![allow(dead_code)]

use std::path::PathBuf;

use price_store::store::PriceStore;
use quote_collector::models::bar::DailyBar;
use tempfile::TempDir;

pub struct TestDb {
    _dir: TempDir, // keep alive for the life of the test
    pub path: String,
    pub store: PriceStore,
}

pub fn setup_store() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    let store = PriceStore::new(path.as_str());
    store.migrate().expect("migrations");

    TestDb {
        _dir: dir,
        path,
        store,
    }
}

pub fn bar(
    ticker: &str,
    date: &str,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
) -> DailyBar {
    DailyBar {
        ticker: ticker.to_string(),
        date: date.to_string(),
        open,
        high,
        low,
        close,
        volume,
    }
}
