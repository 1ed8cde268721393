use crate::constants::DEFAULT_ORS_DIRECTIONS_URL;
use crate::error::{AppError, Result};
use crate::models::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source of street-following round-trip walks.
#[async_trait]
pub trait RoundTripProvider: Send + Sync {
    /// Fetch a loop of roughly `length_m` meters starting and ending at `start`.
    /// Returned coordinates are always `(lat, lon)`.
    async fn round_trip(
        &self,
        start: Coordinates,
        length_m: u32,
        seed: u64,
    ) -> Result<Vec<Coordinates>>;

    /// Whether the provider can be called at all (e.g. has credentials).
    fn is_configured(&self) -> bool {
        true
    }
}

/// openrouteservice directions client, `round_trip` option only.
#[derive(Clone)]
pub struct OrsClient {
    client: Client,
    api_key: Option<String>,
    directions_url: String,
    timeout: Duration,
}

impl OrsClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self::with_url(api_key, DEFAULT_ORS_DIRECTIONS_URL.to_string(), timeout)
    }

    pub fn with_url(api_key: Option<String>, directions_url: String, timeout: Duration) -> Self {
        OrsClient {
            client: Client::new(),
            api_key,
            directions_url,
            timeout,
        }
    }

    /// Swap the underlying HTTP client (proxy, TLS, or pool settings).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn build_request(start: &Coordinates, length_m: u32, seed: u64) -> OrsDirectionsRequest {
        OrsDirectionsRequest {
            // A round trip takes a single point, in [lon, lat] order
            coordinates: vec![[start.lon, start.lat]],
            options: OrsOptions {
                round_trip: OrsRoundTrip {
                    length: length_m,
                    seed,
                },
            },
            instructions: false,
        }
    }
}

#[async_trait]
impl RoundTripProvider for OrsClient {
    async fn round_trip(
        &self,
        start: Coordinates,
        length_m: u32,
        seed: u64,
    ) -> Result<Vec<Coordinates>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingConfiguration("ORS_API_KEY is not set".to_string()))?;

        tracing::debug!(
            length_m,
            seed,
            "ORS round trip request: ({:.4}, {:.4}), {}m, seed {}",
            start.lat, start.lon, length_m, seed
        );

        let response = self
            .client
            .post(&self.directions_url)
            .header("Authorization", api_key)
            .json(&Self::build_request(&start, length_m, seed))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::RoutingApi("Request timed out".to_string())
                } else {
                    AppError::RoutingApi(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                length_m,
                "ORS HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::RoutingApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let collection: OrsFeatureCollection = response
            .json()
            .await
            .map_err(|e| AppError::RoutingApi(format!("Failed to parse response: {}", e)))?;

        let coords = collection.into_lat_lon()?;

        tracing::debug!(
            path_points = coords.len(),
            "ORS response: {} path points for {}m loop",
            coords.len(), length_m
        );

        Ok(coords)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// ORS request types

#[derive(Debug, Serialize)]
struct OrsDirectionsRequest {
    coordinates: Vec<[f64; 2]>,
    options: OrsOptions,
    instructions: bool,
}

#[derive(Debug, Serialize)]
struct OrsOptions {
    round_trip: OrsRoundTrip,
}

#[derive(Debug, Serialize)]
struct OrsRoundTrip {
    length: u32,
    seed: u64,
}

// ORS GeoJSON response types

#[derive(Debug, Deserialize)]
struct OrsFeatureCollection {
    features: Vec<OrsFeature>,
}

#[derive(Debug, Deserialize)]
struct OrsFeature {
    geometry: OrsGeometry,
}

#[derive(Debug, Deserialize)]
struct OrsGeometry {
    /// [lon, lat] or [lon, lat, elevation]
    coordinates: Vec<Vec<f64>>,
}

impl OrsFeatureCollection {
    /// First feature's geometry, flipped to (lat, lon).
    fn into_lat_lon(self) -> Result<Vec<Coordinates>> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or_else(|| AppError::RoutingApi("No route features returned".to_string()))?;

        let coords: Vec<Coordinates> = feature
            .geometry
            .coordinates
            .iter()
            .filter_map(|position| Coordinates::from_lon_lat(position))
            .collect();

        if coords.is_empty() {
            return Err(AppError::RoutingApi("Route geometry is empty".to_string()));
        }

        Ok(coords)
    }
}
