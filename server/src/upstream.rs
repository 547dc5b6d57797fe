//! # SerpAPI
//!
//! Relay to the upstream maps search provider.
//!
//! One outbound request per invocation, no state between calls, no
//! retries. A non-2xx answer from the provider is surfaced as a generic
//! upstream failure; the caller decides what to do with it (today:
//! nothing, the orchestrator degrades to empty results).
//!
//! ## Parameters
//! - `engine` is pinned to the maps search engine.
//! - `gl` carries the two-letter country code.
//! - `ll` biases results around a center point at a fixed zoom level
//!   and is only sent when the caller supplied a `nearCenter` object.
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

pub const SERP_ENDPOINT: &str = "https://serpapi.com/search.json";
pub const DEFAULT_COUNTRY: &str = "IN";

const ENGINE: &str = "google_maps";
const LOCALE: &str = "en";
const SEARCH_TYPE: &str = "search";
const NEAR_ZOOM: &str = "14z";

/// Caller-supplied `{"lat": .., "lng": ..}` bias point.
#[derive(Debug, Deserialize)]
pub struct NearCenter {
    pub lat: f64,
    pub lng: f64,
}

/// Builds the provider query, translating the optional JSON-encoded
/// center point into the provider's `ll=@lat,lng,zoom` syntax.
pub fn build_params(
    query: &str,
    country: &str,
    api_key: &str,
    near_center: Option<&str>,
) -> Result<Vec<(&'static str, String)>, AppError> {
    let mut params = vec![
        ("engine", ENGINE.to_string()),
        ("q", query.to_string()),
        ("api_key", api_key.to_string()),
        ("hl", LOCALE.to_string()),
        ("type", SEARCH_TYPE.to_string()),
        ("gl", country.to_string()),
    ];

    if let Some(raw) = near_center {
        let center: NearCenter = serde_json::from_str(raw)?;
        params.push(("ll", format!("@{},{},{}", center.lat, center.lng, NEAR_ZOOM)));
    }

    Ok(params)
}

/// Performs the provider call and returns the raw JSON body.
pub async fn fetch_raw(
    http: &Client,
    endpoint: &str,
    params: &[(&'static str, String)],
) -> Result<Value, AppError> {
    let response = http.get(endpoint).query(params).send().await?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "SerpAPI error: HTTP {}",
            response.status().as_u16()
        )));
    }

    Ok(response.json().await?)
}
