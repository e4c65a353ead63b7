use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// `loaded`, or `unavailable` when extraction requests will fail.
    pub model: String,
    pub furniture_labels: usize,
    pub blacklist: usize,
    pub standalone_blacklist: usize,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; model availability reported in the body", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dictionaries = state.extractor.dictionaries();
    let model = if state.extractor.model_loaded() {
        "loaded"
    } else {
        "unavailable"
    };
    debug!(model, "Health check");

    Json(HealthResponse {
        status: "OK".to_string(),
        model: model.to_string(),
        furniture_labels: dictionaries.furniture_labels.len(),
        blacklist: dictionaries.blacklist.len(),
        standalone_blacklist: dictionaries.standalone_blacklist.len(),
    })
}
