use crate::constants::LAT_LON_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, WalkRoutesResponse};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Raw query parameters; parsed by hand so bad input gets our JSON error body.
#[derive(Debug, Deserialize)]
pub struct WalkRoutesParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// GET /api/walk_routes?lat=..&lon=..
/// One loop per plan (3/5/7 km). Missing or non-numeric lat/lon is a 400.
pub async fn walk_routes(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<WalkRoutesParams>, QueryRejection>,
) -> Result<Json<WalkRoutesResponse>> {
    let Query(params) = params.map_err(|e| {
        tracing::debug!("Rejected walk routes query: {}", e);
        AppError::InvalidRequest(LAT_LON_REQUIRED.to_string())
    })?;

    let center = Coordinates::parse(params.lat.as_deref(), params.lon.as_deref())
        .map_err(AppError::InvalidRequest)?;

    let routes = state.route_planner.plan_routes(center).await;

    Ok(Json(WalkRoutesResponse { routes }))
}
