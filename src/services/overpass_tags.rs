//! Mapping between POI kinds and OpenStreetMap tags.

use crate::models::PoiCategory;
use std::collections::HashMap;

/// Tags queried for a kind; `"*"` matches any value of the key.
pub fn category_to_osm_tags(category: &PoiCategory) -> Vec<(&'static str, &'static str)> {
    match category {
        PoiCategory::Cafe => vec![("amenity", "cafe")],
        PoiCategory::Sight => vec![
            ("tourism", "attraction"),
            ("tourism", "viewpoint"),
            ("tourism", "museum"),
            ("historic", "*"),
        ],
        PoiCategory::Other => vec![],
    }
}

/// Classify an element from its tags. Order matters: cafes win over sights.
pub fn infer_category(tags: &HashMap<String, String>) -> PoiCategory {
    if tags.get("amenity").map(String::as_str) == Some("cafe") {
        return PoiCategory::Cafe;
    }

    let is_sight = tags
        .get("tourism")
        .map(|t| {
            matches!(
                t.as_str(),
                "attraction" | "viewpoint" | "museum" | "artwork" | "gallery"
            )
        })
        .unwrap_or(false)
        || tags.contains_key("historic");

    if is_sight {
        PoiCategory::Sight
    } else {
        PoiCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_category_to_osm_tags() {
        let cafe = category_to_osm_tags(&PoiCategory::Cafe);
        assert_eq!(cafe, vec![("amenity", "cafe")]);

        let sight = category_to_osm_tags(&PoiCategory::Sight);
        assert!(sight.contains(&("tourism", "attraction")));
        assert!(sight.contains(&("historic", "*")));

        assert!(category_to_osm_tags(&PoiCategory::Other).is_empty());
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category(&tags(&[("amenity", "cafe")])), PoiCategory::Cafe);
        assert_eq!(
            infer_category(&tags(&[("tourism", "viewpoint")])),
            PoiCategory::Sight
        );
        assert_eq!(
            infer_category(&tags(&[("historic", "shrine")])),
            PoiCategory::Sight
        );
        assert_eq!(
            infer_category(&tags(&[("amenity", "cafe"), ("historic", "building")])),
            PoiCategory::Cafe
        );
        assert_eq!(
            infer_category(&tags(&[("amenity", "restaurant")])),
            PoiCategory::Other
        );
        assert_eq!(infer_category(&tags(&[])), PoiCategory::Other);
    }
}
