use crate::models::{Coordinates, Poi, PoiCategory};
use crate::services::overpass::PoiSource;
use std::sync::Arc;

/// Result of a nearby-POI search. Never an error: upstream failure is a flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPois {
    pub pois: Vec<Poi>,
    /// Every upstream endpoint failed; `pois` is empty.
    pub degraded: bool,
}

pub struct PoiService {
    source: Arc<dyn PoiSource>,
}

impl PoiService {
    pub fn new(source: Arc<dyn PoiSource>) -> Self {
        PoiService { source }
    }

    pub fn endpoint_count(&self) -> usize {
        self.source.endpoint_count()
    }

    /// POIs around `center`, nearest first, at most `limit` of them.
    pub async fn find_nearby(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        kinds: &[PoiCategory],
        limit: usize,
    ) -> NearbyPois {
        tracing::info!(
            "POI query: center=({:.4}, {:.4}), radius={}m, kinds={:?}, limit={}",
            center.lat,
            center.lon,
            radius_meters,
            kinds,
            limit
        );

        match self.source.fetch_pois(center, radius_meters, kinds).await {
            Ok(pois) => {
                let pois = rank_by_proximity(center, pois, limit);
                tracing::info!("POI query returned {} results", pois.len());
                NearbyPois {
                    pois,
                    degraded: false,
                }
            }
            Err(e) => {
                tracing::warn!("All POI endpoints failed: {}", e);
                NearbyPois {
                    pois: Vec::new(),
                    degraded: true,
                }
            }
        }
    }
}

/// Sort by squared degree-space distance to `center` and keep the first `limit`.
/// Stable, so equidistant POIs keep upstream order.
pub fn rank_by_proximity(center: &Coordinates, mut pois: Vec<Poi>, limit: usize) -> Vec<Poi> {
    pois.sort_by(|a, b| {
        center
            .degree_distance_sq(&a.coordinates)
            .total_cmp(&center.degree_distance_sq(&b.coordinates))
    });
    pois.truncate(limit);
    pois
}
