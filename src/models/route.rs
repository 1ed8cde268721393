use crate::models::coordinates::{lat_lon_pairs, Coordinates};
use serde::{Deserialize, Serialize};

/// One requested walk: target length, display color, and shape seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePlan {
    pub length_m: u32,
    pub color: &'static str,
    pub seed: u64,
}

/// The loops offered for every location: 3 km yellow, 5 km green, 7 km red.
pub const WALK_ROUTE_PLANS: [RoutePlan; 3] = [
    RoutePlan {
        length_m: 3000,
        color: "#facc15",
        seed: 11,
    },
    RoutePlan {
        length_m: 5000,
        color: "#22c55e",
        seed: 22,
    },
    RoutePlan {
        length_m: 7000,
        color: "#ef4444",
        seed: 33,
    },
];

impl RoutePlan {
    pub fn length_km(&self) -> f64 {
        f64::from(self.length_m) / 1000.0
    }
}

/// Where a route's geometry came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Street-following round trip from the routing provider
    Routed,
    /// Fallback loop built locally
    #[default]
    Synthesized,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteResult {
    pub km: f64,
    pub color: String,
    /// Closed polyline as `[lat, lon]` pairs
    #[serde(with = "lat_lon_pairs")]
    pub coords: Vec<Coordinates>,
    #[serde(default)]
    pub source: RouteSource,
}

impl RouteResult {
    pub fn new(plan: &RoutePlan, coords: Vec<Coordinates>, source: RouteSource) -> Self {
        RouteResult {
            km: plan.length_km(),
            color: plan.color.to_string(),
            coords,
            source,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkRoutesResponse {
    pub routes: Vec<RouteResult>,
}
