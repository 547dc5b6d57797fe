use std::sync::Arc;

use axum::{Extension, Json, extract::Query, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    state::State,
    upstream::{self, DEFAULT_COUNTRY},
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub country: Option<String>,
    /// Client-side filtering concern; accepted for interface
    /// compatibility and ignored here.
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    #[serde(rename = "nearCenter")]
    pub near_center: Option<String>,
}

pub async fn search_locations_handler(
    Extension(state): Extension<Arc<State>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or(AppError::MissingQuery)?;

    let country = params.country.as_deref().unwrap_or(DEFAULT_COUNTRY);

    let request_params = upstream::build_params(
        query,
        country,
        &state.config.serp_api_key,
        params.near_center.as_deref(),
    )?;

    let payload = upstream::fetch_raw(&state.http, &state.config.serp_url, &request_params).await?;

    Ok(Json(payload))
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "OK", "timestamp": Utc::now().to_rfc3339() }))
}
