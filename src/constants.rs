//! Stable application-wide constants.
//!
//! Values here are structural invariants, loop-shape coefficients, and default
//! fallbacks for env-var-based configuration. Anything an operator may want to
//! change at runtime lives in [`Config`](crate::config::Config) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "5000";

// --- Upstream services ---

/// openrouteservice walking directions, GeoJSON flavour.
pub const DEFAULT_ORS_DIRECTIONS_URL: &str =
    "https://api.openrouteservice.org/v2/directions/foot-walking/geojson";

/// Overpass API endpoints in priority order. Overridden by `OVERPASS_ENDPOINTS`.
pub const DEFAULT_OVERPASS_ENDPOINTS: &[&str] = &[
    "https://overpass-api.de/api/interpreter",
    "https://overpass.private.coffee/api/interpreter",
    "https://maps.mail.ru/osm/tools/overpass/api/interpreter",
];

/// Timeout applied to every outbound request. Overridden by `UPSTREAM_TIMEOUT_SECS`.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 25;
/// Upper bound accepted for `UPSTREAM_TIMEOUT_SECS`.
pub const MAX_UPSTREAM_TIMEOUT_SECONDS: u64 = 120;

/// Server-side timeout written into Overpass QL queries.
pub const OVERPASS_QUERY_TIMEOUT_SECONDS: u64 = 25;

// --- Fallback loop shape ---
// Used by `synthesize_loop()` when the routing provider cannot produce a
// round trip. The loop is a wobbly, slightly elliptical closed curve.

/// Smallest loop radius (km); keeps very short requests from collapsing.
pub const LOOP_MIN_RADIUS_KM: f64 = 0.25;
/// Kilometers per degree of latitude.
pub const KM_PER_DEGREE_LAT: f64 = 110.574;
/// Kilometers per degree of longitude at the equator.
pub const KM_PER_DEGREE_LON_EQUATOR: f64 = 111.320;
/// Floor for cos(latitude) so longitude scaling stays finite at the poles.
pub const LOOP_MIN_COS_LAT: f64 = 1e-6;
/// Angular samples around the loop, not counting the closing point.
pub const LOOP_STEPS: usize = 180;
/// Seed used when the caller provides none.
pub const LOOP_DEFAULT_SEED: u64 = 0;
/// Lower bound of the radial wobble amplitude.
pub const LOOP_WOBBLE_MIN: f64 = 0.12;
/// Upper bound (exclusive) of the radial wobble amplitude.
pub const LOOP_WOBBLE_MAX: f64 = 0.20;
/// Number of radial lobes in the wobble term.
pub const LOOP_WOBBLE_LOBES: f64 = 3.0;
/// Phase multiplier for the wobble term.
pub const LOOP_WOBBLE_PHASE_FACTOR: f64 = 0.7;
/// Base longitudinal stretch; averaged over the loop the east-west extent is this fraction.
pub const LOOP_STRETCH_BASE: f64 = 0.85;
/// Amplitude of the longitudinal stretch oscillation.
pub const LOOP_STRETCH_AMPLITUDE: f64 = 0.3;
/// Phase multiplier for the stretch term.
pub const LOOP_STRETCH_PHASE_FACTOR: f64 = 0.3;

// --- POI query defaults ---

/// Default POI search radius in meters.
pub const DEFAULT_POI_RADIUS_METERS: f64 = 1000.0;
/// Largest POI search radius accepted, in meters.
pub const MAX_POI_RADIUS_METERS: f64 = 5000.0;
/// Default number of POIs returned.
pub const DEFAULT_POI_LIMIT: usize = 50;
/// Largest `limit` accepted.
pub const MAX_POI_LIMIT: usize = 200;
/// Error message for a missing or unparsable center point.
pub const LAT_LON_REQUIRED: &str = "lat/lon are required";
/// Error marker returned when every Overpass endpoint failed.
pub const OVERPASS_UNAVAILABLE: &str = "overpass_unavailable";
