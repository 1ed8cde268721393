use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Missing key is not fatal: every walk route falls back to a synthesized loop.
    pub ors_api_key: Option<String>,
    pub ors_directions_url: String,
    /// Overpass endpoints in the order they are tried.
    pub overpass_endpoints: Vec<String>,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let upstream_timeout_secs: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid UPSTREAM_TIMEOUT_SECS")?;

        if upstream_timeout_secs == 0 || upstream_timeout_secs > MAX_UPSTREAM_TIMEOUT_SECONDS {
            return Err(format!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and {} seconds",
                MAX_UPSTREAM_TIMEOUT_SECONDS
            ));
        }

        let overpass_endpoints = match env::var("OVERPASS_ENDPOINTS") {
            Ok(list) => parse_endpoint_list(&list)?,
            Err(_) => DEFAULT_OVERPASS_ENDPOINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            ors_api_key: env::var("ORS_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            ors_directions_url: env::var("ORS_DIRECTIONS_URL")
                .unwrap_or_else(|_| DEFAULT_ORS_DIRECTIONS_URL.to_string()),
            overpass_endpoints,
            upstream_timeout_secs,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated endpoint list, keeping order and dropping blanks.
fn parse_endpoint_list(list: &str) -> Result<Vec<String>, String> {
    let endpoints: Vec<String> = list
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    if endpoints.is_empty() {
        return Err("OVERPASS_ENDPOINTS must list at least one endpoint".to_string());
    }

    Ok(endpoints)
}
