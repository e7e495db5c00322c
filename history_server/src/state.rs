use std::sync::Arc;

use price_store::store::PriceStore;
use quote_collector::providers::nasdaq::NasdaqProvider;

use crate::config::ServerConfig;

/// Shared application state, passed to all route handlers via
/// `axum::extract::State`.
pub struct AppState {
    pub store: PriceStore,
    pub source: NasdaqProvider,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            store: PriceStore::new(config.database_url.as_str()),
            source: NasdaqProvider::new()?,
        }))
    }
}
