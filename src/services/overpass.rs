use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Poi, PoiCategory};
use crate::services::overpass_tags::{category_to_osm_tags, infer_category};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::Duration;

/// Raw POI lookup around a point. Results are unordered and untruncated.
#[async_trait]
pub trait PoiSource: Send + Sync {
    async fn fetch_pois(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        kinds: &[PoiCategory],
    ) -> Result<Vec<Poi>>;

    /// Number of upstream endpoints this source can try.
    fn endpoint_count(&self) -> usize;
}

/// Overpass API client over a fixed, ordered list of redundant endpoints.
#[derive(Clone)]
pub struct OverpassClient {
    client: Client,
    endpoints: Vec<String>,
    timeout: Duration,
}

impl OverpassClient {
    pub fn new(timeout: Duration) -> Self {
        let endpoints = DEFAULT_OVERPASS_ENDPOINTS
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::with_endpoints(endpoints, timeout)
    }

    pub fn with_endpoints(endpoints: Vec<String>, timeout: Duration) -> Self {
        OverpassClient {
            client: Client::new(),
            endpoints,
            timeout,
        }
    }

    /// Swap the underlying HTTP client (proxy, TLS, or pool settings).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Run one query against one endpoint.
    async fn execute_query(&self, endpoint: &str, query: &str) -> Result<Vec<Poi>> {
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("data={}", urlencoding::encode(query)))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::OverpassApi(format!("Request to {} timed out", endpoint))
                } else {
                    AppError::OverpassApi(format!("Request to {} failed: {}", endpoint, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::OverpassApi(format!(
                "{} returned HTTP {}: {}",
                endpoint,
                status,
                error_text.trim()
            )));
        }

        let api_response: OverpassResponse = response.json().await.map_err(|e| {
            AppError::OverpassApi(format!("Failed to parse response from {}: {}", endpoint, e))
        })?;

        Ok(convert_elements_to_pois(api_response.elements))
    }

    fn build_query(&self, center: &Coordinates, radius_meters: f64, kinds: &[PoiCategory]) -> String {
        let mut query_parts = vec![format!(
            "[out:json][timeout:{}];(",
            OVERPASS_QUERY_TIMEOUT_SECONDS
        )];

        for kind in kinds {
            for (key, value) in category_to_osm_tags(kind) {
                let tag_query = if value == "*" {
                    format!(
                        r#"nwr["{}"]["name"](around:{},{},{});"#,
                        key, radius_meters, center.lat, center.lon
                    )
                } else {
                    format!(
                        r#"nwr["{}"="{}"]["name"](around:{},{},{});"#,
                        key, value, radius_meters, center.lat, center.lon
                    )
                };
                query_parts.push(tag_query);
            }
        }

        // Uncapped; ranking and truncation happen after the response
        query_parts.push(");out center;".to_string());
        query_parts.join("\n")
    }
}

#[async_trait]
impl PoiSource for OverpassClient {
    async fn fetch_pois(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        kinds: &[PoiCategory],
    ) -> Result<Vec<Poi>> {
        let query = self.build_query(center, radius_meters, kinds);
        tracing::debug!("Overpass query: {}", query);

        first_success(&self.endpoints, |endpoint| self.execute_query(endpoint, &query)).await
    }

    fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }
}

/// Try `attempt` on each endpoint in order and return the first success.
/// If all fail, the last failure is returned.
async fn first_success<'a, T, F, Fut>(endpoints: &'a [String], mut attempt: F) -> Result<T>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error = None;

    for (idx, endpoint) in endpoints.iter().enumerate() {
        match attempt(endpoint.as_str()).await {
            Ok(value) => {
                if idx > 0 {
                    tracing::info!(
                        endpoint = %endpoint,
                        "Overpass succeeded on fallback endpoint {}/{}",
                        idx + 1,
                        endpoints.len()
                    );
                }
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!(
                    endpoint = %endpoint,
                    "Overpass endpoint {}/{} failed: {}",
                    idx + 1,
                    endpoints.len(),
                    e
                );
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| AppError::OverpassApi("No Overpass endpoints configured".to_string())))
}

fn convert_elements_to_pois(elements: Vec<OverpassElement>) -> Vec<Poi> {
    let mut seen_ids = HashSet::new();

    elements
        .into_iter()
        .filter_map(|elem| {
            // Nodes carry lat/lon directly; ways and relations only have a center
            let (lat, lon) = match (elem.lat, elem.lon, &elem.center) {
                (Some(lat), Some(lon), _) => (lat, lon),
                (_, _, Some(center)) => (center.lat, center.lon),
                _ => return None,
            };

            let name = elem.tags.get("name")?.trim();
            if name.is_empty() {
                return None;
            }

            if !seen_ids.insert((elem.element_type.clone(), elem.id)) {
                return None;
            }

            Some(Poi {
                coordinates: Coordinates::new(lat, lon),
                name: name.to_string(),
                category: infer_category(&elem.tags),
                osm_id: Some(elem.id),
            })
        })
        .collect()
}

// Overpass API response types

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type", default)]
    element_type: String,
    id: i64,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}
