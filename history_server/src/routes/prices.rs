use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use quote_collector::normalize::normalize;
use quote_collector::providers::QuoteSource;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LOOKBACK_YEARS: u32 = 1;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/prices/{ticker}", get(get_prices))
        .route("/api/collect/{ticker}", post(collect_prices))
}

/// `GET /api/prices/{ticker}` — stored history for one ticker, date-ascending.
async fn get_prices(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.clone();
    let wanted = ticker.clone();
    let prices = tokio::task::spawn_blocking(move || store.get_prices(&wanted)).await??;

    match prices {
        Some(prices) if !prices.is_empty() => Ok(Json(json!({
            "ticker": ticker,
            "prices": prices,
        }))),
        _ => Err(ApiError::NotFound(format!(
            "No data found for ticker '{ticker}'"
        ))),
    }
}

/// `POST /api/collect/{ticker}` — one fetch-normalize-save cycle.
///
/// A vendor outage or unknown ticker surfaces as 404, not 500: the adapter's
/// fail-soft contract turns fetch failures into an empty batch.
async fn collect_prices(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let ticker = ticker.trim().to_uppercase();

    let raw = state
        .source
        .fetch_daily_or_empty(&ticker, DEFAULT_LOOKBACK_YEARS)
        .await;
    let batch = normalize(&ticker, &raw);

    if batch.bars.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No data found for ticker '{ticker}'"
        )));
    }

    let store = state.store.clone();
    let bars = batch.bars;
    let count = tokio::task::spawn_blocking(move || store.save(&bars)).await??;

    Ok(Json(json!({
        "message": format!("Successfully collected {count} records for {ticker}"),
        "count": count,
    })))
}
