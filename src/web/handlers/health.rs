//! Health check HTTP handlers

use axum::{extract::State, response::IntoResponse};

use crate::web::{
    extractors::RequestContext, responses::{ok, HealthResponse}, utils::log_request, AppState,
};

/// Health check endpoint
///
/// Reports the process as healthy and names the inventory API it talks to;
/// the API itself is not probed.
pub async fn health_check(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&context);
    ok(HealthResponse::healthy(state.config.api.base_url.clone()))
}
