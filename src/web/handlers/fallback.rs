//! Unmatched routes

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::web::responses::not_found_page;

/// Browser and tool probes under `/.well-known/` get an empty JSON object;
/// everything else gets the not-found page.
pub async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/.well-known/") {
        return (StatusCode::OK, Json(serde_json::json!({}))).into_response();
    }

    not_found_page("The route you requested could not be found on the server.")
}
