//! The search orchestrator, the crate's single public operation.
//!
//! Ties the cache, proxy call, normalizer, and region filter into one
//! sequential pipeline per invocation. Failures in the network or
//! decoding steps collapse to an empty suggestion list at this
//! boundary; the reason is logged but never surfaced, so callers see
//! "no matches" either way.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::cache::{MemoryStore, SearchCache, SessionStore};
use crate::geo::{filter_by_region, BoundingBox};
use crate::normalize::normalize;
use crate::suggestion::Suggestion;

const DEFAULT_LOCALE: &str = "en";

/// Center point used to bias provider results geographically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    pub region_name: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub near_center: Option<NearCenter>,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search proxy returned HTTP {0}")]
    UpstreamStatus(u16),
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode request parameter: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Appends the region name to the query unless it is already present as
/// a case-insensitive substring.
pub fn compose_query(query: &str, region_name: Option<&str>) -> String {
    let trimmed = query.trim();

    match region_name {
        Some(region) if !trimmed.to_lowercase().contains(&region.to_lowercase()) => {
            format!("{trimmed} {region}").trim().to_string()
        }
        _ => trimmed.to_string(),
    }
}

/// Location search against the proxy endpoint, with per-session
/// memoization. The cache is owned here exclusively.
pub struct SearchService<S = MemoryStore> {
    endpoint: String,
    http: reqwest::Client,
    cache: SearchCache<S>,
}

impl SearchService<MemoryStore> {
    /// Service with the default in-memory session store.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_store(endpoint, MemoryStore::new())
    }
}

impl<S: SessionStore> SearchService<S> {
    pub fn with_store(endpoint: impl Into<String>, store: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            cache: SearchCache::new(store),
        }
    }

    /// Searches for locations matching a free-text query.
    ///
    /// Returns an empty list for a blank query, on a cache-missed
    /// upstream failure, and for legitimately zero matches; the three
    /// are indistinguishable to the caller by design.
    pub async fn search_locations(
        &self,
        query: &str,
        country: Option<&str>,
        options: &SearchOptions,
    ) -> Vec<Suggestion> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let composed = compose_query(trimmed, options.region_name.as_deref());

        if let Some(cached) = self.cache.get(&composed) {
            return cached;
        }

        match self.search_inner(&composed, country, options).await {
            Ok(suggestions) => {
                self.cache.put(&composed, &suggestions);
                suggestions
            }
            Err(err) => {
                warn!("location search failed: {err}");
                Vec::new()
            }
        }
    }

    async fn search_inner(
        &self,
        composed: &str,
        country: Option<&str>,
        options: &SearchOptions,
    ) -> Result<Vec<Suggestion>, SearchError> {
        let mut request = self
            .http
            .get(&self.endpoint)
            .query(&[("q", composed), ("hl", DEFAULT_LOCALE)]);

        if let Some(country) = country {
            request = request.query(&[("country", country)]);
        }

        if let Some(center) = &options.near_center {
            let encoded = serde_json::to_string(center)?;
            request = request.query(&[("nearCenter", encoded.as_str())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status().as_u16()));
        }

        let payload: Value = response.json().await?;
        let suggestions = normalize(&payload, composed);

        Ok(filter_by_region(
            suggestions,
            options.region_name.as_deref(),
            options.bbox,
        ))
    }
}
