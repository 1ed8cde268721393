use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Poi, PoiCategory};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for POI search, kept as strings so validation owns the error shape
#[derive(Debug, Default, Deserialize)]
pub struct PoiQueryParams {
    /// Latitude of the center point
    pub lat: Option<String>,
    /// Longitude of the center point
    pub lon: Option<String>,
    /// Search radius in meters (default: 1000, max: 5000)
    pub radius: Option<String>,
    /// Comma-separated kinds (`cafe`, `sight`); `types` is accepted too
    #[serde(alias = "types")]
    pub kinds: Option<String>,
    /// Maximum number of results (default: 50, max: 200)
    pub limit: Option<String>,
}

/// Validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiSearch {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub kinds: Vec<PoiCategory>,
    pub limit: usize,
}

impl PoiQueryParams {
    pub fn validate(&self) -> Result<PoiSearch> {
        let center = Coordinates::parse(self.lat.as_deref(), self.lon.as_deref())
            .map_err(AppError::InvalidRequest)?;

        let radius_meters = match self.radius.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_POI_RADIUS_METERS,
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| AppError::InvalidRequest(format!("Invalid radius: {}", raw)))?,
        };
        if !(radius_meters > 0.0 && radius_meters <= MAX_POI_RADIUS_METERS) {
            return Err(AppError::InvalidRequest(format!(
                "radius must be between 0 and {} meters",
                MAX_POI_RADIUS_METERS
            )));
        }

        let limit = match self.limit.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_POI_LIMIT,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| AppError::InvalidRequest(format!("Invalid limit: {}", raw)))?,
        };
        if limit == 0 || limit > MAX_POI_LIMIT {
            return Err(AppError::InvalidRequest(format!(
                "limit must be between 1 and {}",
                MAX_POI_LIMIT
            )));
        }

        Ok(PoiSearch {
            center,
            radius_meters,
            kinds: PoiCategory::parse_kinds(self.kinds.as_deref()),
            limit,
        })
    }
}

/// Response for POI queries
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PoiResponse {
    pub pois: Vec<Poi>,
    /// Present only when the POI service was unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/pois - POIs near a point, nearest first
///
/// Bad numeric input is a 400 with an empty list; an unreachable upstream is
/// a 200 with an empty list and `"error": "overpass_unavailable"`.
pub async fn query_pois(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<PoiQueryParams>, QueryRejection>,
) -> Response {
    let search = match params {
        Ok(Query(params)) => params.validate(),
        Err(e) => Err(AppError::InvalidRequest(e.body_text())),
    };
    let search = match search {
        Ok(search) => search,
        Err(e) => {
            tracing::debug!("Rejected POI query: {}", e);
            let body = PoiResponse {
                pois: Vec::new(),
                error: None,
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let nearby = state
        .poi_service
        .find_nearby(&search.center, search.radius_meters, &search.kinds, search.limit)
        .await;

    let body = PoiResponse {
        pois: nearby.pois,
        error: nearby.degraded.then(|| OVERPASS_UNAVAILABLE.to_string()),
    };

    (StatusCode::OK, Json(body)).into_response()
}
