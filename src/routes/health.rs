use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /api/health - Report how upstream services are wired
///
/// A missing routing key is reported but does not fail the check: walk routes
/// still work through the fallback loop.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    status["checks"]["routing"] = if state.route_planner.provider_configured() {
        json!("configured")
    } else {
        json!("missing_api_key")
    };

    let endpoints = state.poi_service.endpoint_count();
    status["checks"]["overpass_endpoints"] = json!(endpoints);
    if endpoints == 0 {
        status["status"] = json!("degraded");
    }

    Json(status)
}
