use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Cafe,
    Sight,
    Other,
}

impl PoiCategory {
    /// Kinds queried when the caller names none we recognise.
    pub fn default_kinds() -> Vec<PoiCategory> {
        vec![PoiCategory::Cafe, PoiCategory::Sight]
    }

    /// Parse a comma-separated `kinds` list.
    ///
    /// Unknown entries are skipped; duplicates collapse; an empty result
    /// means "use the defaults".
    pub fn parse_kinds(raw: Option<&str>) -> Vec<PoiCategory> {
        let mut kinds = Vec::new();

        for token in raw.unwrap_or_default().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.parse::<PoiCategory>() {
                Ok(PoiCategory::Other) => {
                    tracing::debug!("POI kind 'other' cannot be queried, ignoring");
                }
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(e) => tracing::debug!("{}, ignoring", e),
            }
        }

        if kinds.is_empty() {
            Self::default_kinds()
        } else {
            kinds
        }
    }
}

impl FromStr for PoiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cafe" | "cafes" | "coffee" => Ok(PoiCategory::Cafe),
            "sight" | "sights" | "sightseeing" | "attraction" => Ok(PoiCategory::Sight),
            "other" => Ok(PoiCategory::Other),
            _ => Err(format!("Invalid POI kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poi {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub name: String,
    pub category: PoiCategory,
    /// OpenStreetMap element id, used for de-duplication only
    #[serde(skip)]
    pub osm_id: Option<i64>,
}

impl Poi {
    pub fn new(name: String, category: PoiCategory, coordinates: Coordinates) -> Self {
        Poi {
            coordinates,
            name,
            category,
            osm_id: None,
        }
    }
}
