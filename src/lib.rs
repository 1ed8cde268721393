// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::poi_service::PoiService;
use services::route_planner::WalkRoutePlanner;

// App state for sharing across the application
pub struct AppState {
    pub route_planner: WalkRoutePlanner,
    pub poi_service: PoiService,
}
