use serde::{Deserialize, Serialize};

/// Provider that produced a suggestion.
///
/// Only one provider exists today; the tag stays so a future
/// multi-provider merge can tell results apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "serpapi")]
    SerpApi,
}

/// One normalized candidate location.
///
/// `id` is unique within a single search response only. When the
/// provider supplies no identifier the fallback is built from the list
/// position and title, so the same place can get a different `id` on a
/// later call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub place_name: String,
    /// `[longitude, latitude]`, absent when the provider gave no
    /// geocoordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub source: Source,
}

/// Composes the `"{title}, {address}"` display string, stripping the
/// comma artifact left behind when either side is empty.
pub fn compose_place_name(title: &str, address: &str) -> String {
    let joined = format!("{title}, {address}");

    let stripped = match joined.strip_prefix(',') {
        Some(rest) => rest.trim_start(),
        None => joined.as_str(),
    };

    let trimmed = stripped.trim_end();
    match trimmed.strip_suffix(',') {
        Some(rest) => rest.trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
