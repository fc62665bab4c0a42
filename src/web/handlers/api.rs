//! JSON API handlers
//!
//! Every table of the interface is also available as JSON, paged and sorted
//! with the same query parameters as the HTML pages.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, ValidationError};
use crate::forms::{normalize, VehicleDraft};
use crate::pages::{
    media_table, ListingPage, ListingParams, MediaTab, IMAGE_COLUMNS, SPIN_COLUMNS, VIDEO_COLUMNS,
};
use crate::table::{ColumnSpec, TableParams, Tabular};
use crate::web::{
    extractors::RequestContext,
    responses::{handle_error, ok, validation_error, PaginatedResponse},
    utils::{log_request, parse_id},
    AppState,
};

/// `GET /api/v1/vehicles`
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let vehicles = match state.api.list_vehicles().await {
        Ok(vehicles) => vehicles,
        Err(e) => return handle_error(e.into()),
    };

    let listing = ListingPage::from_params(vehicles, Vec::new(), &params, state.config.table.page_size);
    ok(PaginatedResponse::from_view(&listing.view())).into_response()
}

fn media_page<R: Tabular + Clone + Serialize>(
    rows: &[R],
    columns: &[ColumnSpec<R::Field>],
    params: &TableParams,
    page_size: usize,
) -> Response {
    let (_, view) = media_table(columns, rows, params, page_size);
    ok(PaginatedResponse::from_view(&view)).into_response()
}

/// `GET /api/v1/vehicles/:id/:tab` where tab is `images`, `videos` or `spins`
pub async fn list_vehicle_media(
    State(state): State<AppState>,
    Path((id, tab)): Path<(String, String)>,
    Query(params): Query<TableParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let Some(vehicle_id) = parse_id(&id) else {
        return handle_error(AppError::not_found("vehicle", id));
    };
    let Some(tab) = MediaTab::from_name(&tab) else {
        return handle_error(AppError::not_found("media tab", tab));
    };

    let page_size = state.config.table.media_page_size;
    let result = match tab {
        MediaTab::Images => state
            .api
            .list_images(vehicle_id)
            .await
            .map(|rows| media_page(&rows, IMAGE_COLUMNS, &params, page_size)),
        MediaTab::Videos => state
            .api
            .list_videos(vehicle_id)
            .await
            .map(|rows| media_page(&rows, VIDEO_COLUMNS, &params, page_size)),
        MediaTab::Spins => state
            .api
            .list_spins(vehicle_id)
            .await
            .map(|rows| media_page(&rows, SPIN_COLUMNS, &params, page_size)),
    };

    result.unwrap_or_else(|e| handle_error(e.into()))
}

/// `POST /api/v1/vehicles/validate`
///
/// Answers with the normalized record, or 400 with one message per field.
pub async fn validate_vehicle(context: RequestContext, Json(draft): Json<VehicleDraft>) -> Response {
    log_request(&context);

    match normalize(&draft) {
        Ok(record) => ok(record).into_response(),
        Err(ValidationError { errors }) => validation_error(&errors).into_response(),
    }
}
