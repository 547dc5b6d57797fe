//! Turns the upstream provider's raw JSON into [`Suggestion`] values.
//!
//! The provider answers a maps search in one of two shapes: a
//! `local_results` array (the common case) or a single `place_results`
//! object when the query resolved to exactly one place. The payload is
//! classified into [`SearchPayload`] first so the precedence rule is
//! explicit: local results always win, the single place is only a
//! fallback when they yield nothing.

use serde::Deserialize;
use serde_json::Value;

use crate::suggestion::{compose_place_name, Source, Suggestion};

#[derive(Debug, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of the provider's `local_results` array.
#[derive(Debug, Default, Deserialize)]
pub struct LocalResult {
    pub place_id: Option<String>,
    pub data_id: Option<String>,
    pub position: Option<u32>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub full_address: Option<String>,
    pub description: Option<String>,
    pub gps_coordinates: Option<GpsCoordinates>,
}

/// The provider's single `place_results` object.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceResult {
    pub place_id: Option<String>,
    pub data_id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub formatted_address: Option<String>,
    pub gps_coordinates: Option<GpsCoordinates>,
}

/// Classified upstream payload.
pub enum SearchPayload {
    LocalResults(Vec<LocalResult>),
    SinglePlace(Box<PlaceResult>),
    Empty,
}

impl SearchPayload {
    /// Classifies a raw payload. Entries that do not deserialize are
    /// dropped rather than failing the whole response.
    pub fn classify(payload: &Value) -> Self {
        if let Some(entries) = payload.get("local_results").and_then(Value::as_array) {
            let results: Vec<LocalResult> = entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect();

            if !results.is_empty() {
                return Self::LocalResults(results);
            }
        }

        if let Some(place) = payload.get("place_results") {
            if place.is_object() {
                if let Ok(place) = serde_json::from_value::<PlaceResult>(place.clone()) {
                    return Self::SinglePlace(Box::new(place));
                }
            }
        }

        Self::Empty
    }
}

// Empty strings count as absent, matching the original fallback chains.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn to_pair(coords: Option<&GpsCoordinates>) -> Option<[f64; 2]> {
    coords.map(|c| [c.longitude, c.latitude])
}

/// Maps one upstream payload to suggestions. `query` is only used as the
/// last-resort id/text for a bare `place_results` object.
pub fn normalize(payload: &Value, query: &str) -> Vec<Suggestion> {
    match SearchPayload::classify(payload) {
        SearchPayload::LocalResults(results) => {
            results.iter().map(local_to_suggestion).collect()
        }
        SearchPayload::SinglePlace(place) => vec![place_to_suggestion(&place, query)],
        SearchPayload::Empty => Vec::new(),
    }
}

fn local_to_suggestion(result: &LocalResult) -> Suggestion {
    let title = non_empty(result.title.as_deref())
        .or(non_empty(result.name.as_deref()))
        .unwrap_or("");

    let id = non_empty(result.place_id.as_deref())
        .or(non_empty(result.data_id.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| {
            let position = result.position.map(|p| p.to_string()).unwrap_or_default();
            format!("{position}-{title}")
        });

    let address = non_empty(result.address.as_deref())
        .or(non_empty(result.full_address.as_deref()))
        .or(non_empty(result.description.as_deref()));

    Suggestion {
        id,
        text: title.to_string(),
        place_name: compose_place_name(title, address.unwrap_or("")),
        coordinates: to_pair(result.gps_coordinates.as_ref()),
        address: address.map(str::to_string),
        source: Source::SerpApi,
    }
}

fn place_to_suggestion(place: &PlaceResult, query: &str) -> Suggestion {
    let title = non_empty(place.title.as_deref())
        .or(non_empty(place.name.as_deref()))
        .unwrap_or(query);

    let id = non_empty(place.place_id.as_deref())
        .or(non_empty(place.data_id.as_deref()))
        .or(non_empty(place.title.as_deref()))
        .or(non_empty(place.name.as_deref()))
        .unwrap_or(query);

    let address = non_empty(place.address.as_deref())
        .or(non_empty(place.formatted_address.as_deref()));

    Suggestion {
        id: id.to_string(),
        text: title.to_string(),
        place_name: compose_place_name(title, address.unwrap_or("")),
        coordinates: to_pair(place.gps_coordinates.as_ref()),
        address: address.map(str::to_string),
        source: Source::SerpApi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn local_results_map_every_entry() {
        let payload = json!({
            "local_results": [
                {
                    "position": 1,
                    "title": "Surya Mahal",
                    "address": "Bhilwara, Rajasthan",
                    "place_id": "ChIJabc",
                    "gps_coordinates": { "latitude": 25.35, "longitude": 74.64 }
                },
                {
                    "position": 2,
                    "title": "Surya Mahal Hotel",
                    "full_address": "Jaipur, Rajasthan"
                }
            ]
        });

        let suggestions = normalize(&payload, "surya");

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, "ChIJabc");
        assert_eq!(suggestions[0].text, "Surya Mahal");
        assert_eq!(suggestions[0].place_name, "Surya Mahal, Bhilwara, Rajasthan");
        assert_eq!(suggestions[0].coordinates, Some([74.64, 25.35]));

        // no place_id/data_id -> position-title composite
        assert_eq!(suggestions[1].id, "2-Surya Mahal Hotel");
        assert_eq!(suggestions[1].address.as_deref(), Some("Jaipur, Rajasthan"));
        assert_eq!(suggestions[1].coordinates, None);
    }

    #[test]
    fn local_results_take_precedence_over_place_results() {
        let payload = json!({
            "local_results": [
                { "position": 1, "title": "From The List" }
            ],
            "place_results": {
                "title": "From The Place",
                "address": "Should Not Appear"
            }
        });

        let suggestions = normalize(&payload, "query");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, "From The List");
    }

    #[test]
    fn empty_local_results_fall_back_to_place_results() {
        let payload = json!({
            "local_results": [],
            "place_results": {
                "place_id": "ChIJxyz",
                "title": "City Palace",
                "formatted_address": "Udaipur, Rajasthan",
                "gps_coordinates": { "latitude": 24.58, "longitude": 73.68 }
            }
        });

        let suggestions = normalize(&payload, "city palace");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "ChIJxyz");
        assert_eq!(suggestions[0].place_name, "City Palace, Udaipur, Rajasthan");
        assert_eq!(suggestions[0].coordinates, Some([73.68, 24.58]));
    }

    #[test]
    fn bare_place_results_fall_back_to_query() {
        let payload = json!({ "place_results": {} });

        let suggestions = normalize(&payload, "surya mahal");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "surya mahal");
        assert_eq!(suggestions[0].text, "surya mahal");
        assert_eq!(suggestions[0].address, None);
    }

    #[test]
    fn payload_with_neither_shape_is_empty() {
        assert!(normalize(&json!({ "search_metadata": {} }), "q").is_empty());
        assert!(normalize(&json!({}), "q").is_empty());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let payload = json!({
            "local_results": [
                {
                    "position": 3,
                    "place_id": "",
                    "title": "",
                    "name": "Fallback Name",
                    "address": "",
                    "description": "Near the lake"
                }
            ]
        });

        let suggestions = normalize(&payload, "q");

        assert_eq!(suggestions[0].id, "3-Fallback Name");
        assert_eq!(suggestions[0].text, "Fallback Name");
        assert_eq!(suggestions[0].address.as_deref(), Some("Near the lake"));
    }

    #[test]
    fn missing_position_renders_empty_in_composite_id() {
        let payload = json!({
            "local_results": [ { "title": "Solo" } ]
        });

        assert_eq!(normalize(&payload, "q")[0].id, "-Solo");
    }
}
