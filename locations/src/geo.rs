//! Region filtering for normalized suggestions.

use serde::{Deserialize, Serialize};

use crate::suggestion::Suggestion;

/// Rectangular latitude/longitude range, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Approximate box around the default operating region (Rajasthan).
pub const DEFAULT_REGION_BBOX: BoundingBox = BoundingBox {
    min_lat: 23.0,
    max_lat: 30.5,
    min_lng: 69.0,
    max_lng: 78.9,
};

impl BoundingBox {
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Keeps the suggestions plausibly inside the target region.
///
/// With neither a region name nor a box this is a no-op. A suggestion
/// survives when its name contains the region string (case-insensitive)
/// or its coordinates fall inside the box; suggestions without
/// coordinates can only survive via the name path. Order is preserved.
pub fn filter_by_region(
    suggestions: Vec<Suggestion>,
    region_name: Option<&str>,
    bbox: Option<BoundingBox>,
) -> Vec<Suggestion> {
    if region_name.is_none() && bbox.is_none() {
        return suggestions;
    }

    let bbox = bbox.unwrap_or(DEFAULT_REGION_BBOX);
    let region_lower = region_name.map(str::to_lowercase);

    suggestions
        .into_iter()
        .filter(|suggestion| {
            let matches_name = region_lower.as_deref().is_some_and(|region| {
                suggestion.place_name.to_lowercase().contains(region)
                    || suggestion.text.to_lowercase().contains(region)
            });

            let in_bbox = suggestion
                .coordinates
                .is_some_and(|[lng, lat]| bbox.contains(lng, lat));

            matches_name || in_bbox
        })
        .collect()
}
