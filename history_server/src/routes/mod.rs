pub mod prices;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new().merge(prices::routes())
}
