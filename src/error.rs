use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Routing API error: {0}")]
    RoutingApi(String),

    #[error("Overpass API error: {0}")]
    OverpassApi(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::RoutingApi(ref e) => {
                tracing::error!("Routing API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::OverpassApi(ref e) => {
                tracing::error!("Overpass API error: {}", e);
                (StatusCode::BAD_GATEWAY, "POI service error")
            }
            AppError::MissingConfiguration(ref e) => {
                tracing::error!("Missing configuration: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "Service not configured")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_renders_message_as_error() {
        let response = AppError::InvalidRequest("lat/lon are required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_errors_map_to_gateway_statuses() {
        let routing = AppError::RoutingApi("HTTP 429".to_string()).into_response();
        assert_eq!(routing.status(), StatusCode::BAD_GATEWAY);

        let overpass = AppError::OverpassApi("HTTP 504".to_string()).into_response();
        assert_eq!(overpass.status(), StatusCode::BAD_GATEWAY);

        let config = AppError::MissingConfiguration("ORS_API_KEY".to_string()).into_response();
        assert_eq!(config.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
