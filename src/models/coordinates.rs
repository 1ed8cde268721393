use crate::constants::LAT_LON_REQUIRED;
use serde::{Deserialize, Serialize};

/// WGS84 position in degrees.
///
/// Only numeric sanity is checked (see [`Coordinates::parse`]); out-of-range
/// values pass through untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    /// Build from a GeoJSON-style `[lon, lat, ...]` position.
    pub fn from_lon_lat(position: &[f64]) -> Option<Self> {
        match position {
            [lon, lat, ..] => Some(Coordinates::new(*lat, *lon)),
            _ => None,
        }
    }

    /// Parse raw query-string values. Both must be finite floats.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, String> {
        let lat = parse_finite(lat).ok_or(LAT_LON_REQUIRED)?;
        let lon = parse_finite(lon).ok_or(LAT_LON_REQUIRED)?;
        Ok(Coordinates::new(lat, lon))
    }

    /// `[lat, lon]`, the order clients draw with.
    pub fn to_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Squared Euclidean distance in degree space.
    /// Only meaningful for ranking at neighborhood scale.
    pub fn degree_distance_sq(&self, other: &Coordinates) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        d_lat * d_lat + d_lon * d_lon
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of a polyline in kilometers.
pub fn path_length_km(path: &[Coordinates]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Serde adapter writing a path as `[[lat, lon], ...]`.
pub mod lat_lon_pairs {
    use super::Coordinates;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(path: &[Coordinates], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(path.iter().map(Coordinates::to_lat_lon))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Coordinates>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs
            .into_iter()
            .map(|[lat, lon]| Coordinates::new(lat, lon))
            .collect())
    }
}
