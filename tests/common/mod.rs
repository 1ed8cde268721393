use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use sanpo::services::openroute::OrsClient;
use sanpo::services::overpass::OverpassClient;
use sanpo::services::poi_service::PoiService;
use sanpo::services::route_planner::WalkRoutePlanner;
use sanpo::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

#[allow(dead_code)]
pub const TEST_ORS_KEY: &str = "test-ors-key";

/// HTTP client that never goes through a system proxy, so stubs on 127.0.0.1 are reachable
#[allow(dead_code)]
pub fn local_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client")
}

/// Serve `app` on an ephemeral local port and return its base URL
#[allow(dead_code)]
pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    format!("http://{}", addr)
}

/// A local URL nothing is listening on
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}/api/interpreter", addr)
}

/// Routing stub: echoes a small loop around the requested point in [lon, lat] order.
/// Requires the test key; answers 429 for lengths listed in `rate_limited`.
#[allow(dead_code)]
pub fn ors_stub(rate_limited: &'static [u64]) -> Router {
    Router::new().route(
        "/ors",
        post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
            if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(TEST_ORS_KEY) {
                return (StatusCode::FORBIDDEN, "Access to this API has been disallowed")
                    .into_response();
            }

            let lon = body["coordinates"][0][0].as_f64().unwrap_or_default();
            let lat = body["coordinates"][0][1].as_f64().unwrap_or_default();
            let length = body["options"]["round_trip"]["length"]
                .as_u64()
                .unwrap_or_default();

            if rate_limited.contains(&length) {
                return (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded").into_response();
            }

            let span = length as f64 / 1_000_000.0;
            Json(json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": { "summary": { "distance": length } },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [
                            [lon, lat],
                            [lon + span, lat],
                            [lon + span, lat + span, 12.0],
                            [lon, lat]
                        ]
                    }
                }]
            }))
            .into_response()
        }),
    )
}

/// Overpass stub that always fails with the given status
#[allow(dead_code)]
pub fn overpass_down(status: StatusCode) -> Router {
    Router::new().route(
        "/api/interpreter",
        post(move || async move { (status, "Dispatcher_Client::request_read_and_idx::timeout") }),
    )
}

/// Overpass stub answering with a fixed element list
#[allow(dead_code)]
pub fn overpass_up(elements: Value) -> Router {
    Router::new().route(
        "/api/interpreter",
        post(move || {
            let elements = elements.clone();
            async move { Json(json!({ "version": 0.6, "elements": elements })) }
        }),
    )
}

/// Sample elements around Aoshima (31.915, 131.423), deliberately not sorted by distance
#[allow(dead_code)]
pub fn sample_elements() -> Value {
    json!([
        { "type": "node", "id": 10, "lat": 31.930, "lon": 131.423,
          "tags": { "name": "Far Cafe", "amenity": "cafe" } },
        { "type": "way", "id": 20, "center": { "lat": 31.916, "lon": 131.423 },
          "tags": { "name": "Shrine Gate", "historic": "wayside_shrine" } },
        { "type": "node", "id": 30, "lat": 31.915, "lon": 131.425,
          "tags": { "name": "Seaside Coffee", "amenity": "cafe" } },
        { "type": "node", "id": 40, "lat": 31.920, "lon": 131.430,
          "tags": { "name": "Ocean View", "tourism": "viewpoint" } }
    ])
}

/// Build the application router around the given upstream clients
#[allow(dead_code)]
pub fn build_app(ors_client: OrsClient, overpass_client: OverpassClient) -> Router {
    let state = Arc::new(AppState {
        route_planner: WalkRoutePlanner::new(Arc::new(ors_client)),
        poi_service: PoiService::new(Arc::new(overpass_client)),
    });

    sanpo::routes::create_router(state)
}

/// Routing client with no API key: every plan falls back
#[allow(dead_code)]
pub fn unconfigured_ors() -> OrsClient {
    OrsClient::with_url(
        None,
        "http://127.0.0.1:9/ors".to_string(),
        Duration::from_secs(2),
    )
    .with_http_client(local_http_client())
}

#[allow(dead_code)]
pub fn overpass_client(endpoints: Vec<String>) -> OverpassClient {
    OverpassClient::with_endpoints(endpoints, Duration::from_secs(5))
        .with_http_client(local_http_client())
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
