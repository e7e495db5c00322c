use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Text};
use price_store::db::connection::connect_sqlite;

mod common;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

#[test]
fn migrations_apply_on_temp_file() {
    let db = common::setup_store();

    // Both tables exist and accept rows in the expected shape.
    let mut conn = connect_sqlite(&db.path).expect("connect");
    conn.batch_execute(
        "INSERT INTO assets (ticker) VALUES ('AAPL');
         INSERT INTO prices (asset_id, date, open_price, high_price, low_price, close_price, volume)
         VALUES (1, '2024-01-02', 10.0, 11.0, 9.5, 10.5, 1000);",
    )
    .expect("insert");
}

#[test]
fn connection_pragmas_are_applied() {
    let db = common::setup_store();
    let mut conn = connect_sqlite(&db.path).expect("connect");

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(&mut conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(&mut conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(&mut conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

#[test]
fn ticker_uniqueness_is_enforced() {
    let db = common::setup_store();
    let mut conn = connect_sqlite(&db.path).expect("connect");

    conn.batch_execute("INSERT INTO assets (ticker) VALUES ('AAPL');")
        .expect("first insert");
    let dup = conn.batch_execute("INSERT INTO assets (ticker) VALUES ('AAPL');");
    assert!(dup.is_err());
}
