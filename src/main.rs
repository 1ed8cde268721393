use sanpo::config::Config;
use sanpo::services::openroute::OrsClient;
use sanpo::services::overpass::OverpassClient;
use sanpo::services::poi_service::PoiService;
use sanpo::services::route_planner::WalkRoutePlanner;
use sanpo::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sanpo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting sanpo API server");
    tracing::info!("Configuration loaded successfully");

    if config.ors_api_key.is_none() {
        tracing::warn!("ORS_API_KEY is not set. Walk routes will use synthesized loops.");
    }

    // Initialize services
    let timeout = Duration::from_secs(config.upstream_timeout_secs);
    let ors_client = OrsClient::with_url(
        config.ors_api_key.clone(),
        config.ors_directions_url.clone(),
        timeout,
    );
    let overpass_client = OverpassClient::with_endpoints(config.overpass_endpoints.clone(), timeout);

    tracing::info!(
        "Overpass endpoints (priority order): {}",
        config.overpass_endpoints.join(", ")
    );

    // Create application state
    let state = Arc::new(AppState {
        route_planner: WalkRoutePlanner::new(Arc::new(ors_client)),
        poi_service: PoiService::new(Arc::new(overpass_client)),
    });

    // Build router with CORS and tracing
    let app = sanpo::routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
