//! Rooftop detail page handler

use axum::{
    extract::{Path, Query, State},
    response::{Html, Response},
};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::Vehicle;
use crate::pages::{RooftopPage, VEHICLE_COLUMNS};
use crate::table::TableParams;
use crate::web::{
    extractors::RequestContext,
    responses::{not_found_page, page},
    templates::{render, RooftopTemplate},
    utils::{log_request, parse_id},
    views::{build_table, ActionLink, TableLinks},
    AppState,
};

const NOT_FOUND: &str = "Rooftop not found";

/// `GET /rooftops/:id`
pub async fn rooftop_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TableParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let Some(id) = parse_id(&id) else {
        return not_found_page(NOT_FOUND);
    };

    let (rooftop, vehicles) = tokio::join!(state.api.get_rooftop(id), state.api.list_vehicles());
    let (rooftop, vehicles) = match (rooftop, vehicles) {
        (Ok(rooftop), Ok(vehicles)) => (rooftop, vehicles),
        (Err(e), _) | (_, Err(e)) => {
            warn!(request_id = %context.request_id, rooftop_id = id, "Rooftop page failed to load: {}", e);
            return not_found_page(NOT_FOUND);
        }
    };

    let rooftop_page =
        RooftopPage::from_params(rooftop, vehicles, &params, state.config.table.page_size);
    page(render_rooftop(&rooftop_page))
}

fn render_rooftop(rooftop_page: &RooftopPage) -> AppResult<Html<String>> {
    let base = format!("/rooftops/{}", rooftop_page.rooftop().id);
    let links = TableLinks {
        base: &base,
        scope: Vec::new(),
        search_placeholder: "Search vehicles at this rooftop...",
        empty_message: "No vehicles found at this rooftop.",
    };
    let view = rooftop_page.view();
    let table = build_table(
        VEHICLE_COLUMNS,
        rooftop_page.table(),
        &view,
        &links,
        |vehicle: &Vehicle| ActionLink::vehicle_actions(vehicle.id),
    );

    render(&RooftopTemplate {
        rooftop: rooftop_page.rooftop().clone(),
        vehicle_count: rooftop_page.vehicle_count(),
        table,
    })
}
