pub mod health;
pub mod pois;
pub mod walk_routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/walk_routes", get(walk_routes::walk_routes))
        .route("/api/pois", get(pois::query_pois))
        .route("/api/health", get(health::health_check))
        .with_state(state)
}
