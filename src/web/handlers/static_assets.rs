//! Static asset handlers
//!
//! Serves the embedded stylesheet.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::StaticAssets;

/// Serve a static asset by path
pub async fn serve_static_asset(Path(path): Path<String>) -> Response {
    let asset_path = format!("static/{path}");

    match StaticAssets::get_asset(&asset_path) {
        Some(file) => (
            [
                (header::CONTENT_TYPE, StaticAssets::get_content_type(&path)),
                (header::CACHE_CONTROL, "public, max-age=31536000"),
            ],
            file.data.to_vec(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
