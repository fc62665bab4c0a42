//! Vehicle listing page handler

use axum::{
    extract::{Query, State},
    response::Response,
};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::Vehicle;
use crate::pages::{ListingPage, ListingParams, VEHICLE_COLUMNS};
use crate::web::{
    extractors::RequestContext,
    responses::page,
    templates::{render, ListingTemplate, SidebarLink},
    utils::{href, log_request},
    views::{build_table, ActionLink, TableLinks},
    AppState,
};

/// `GET /`
///
/// If either collection cannot be fetched the page renders with no
/// vehicles and no rooftops.
pub async fn listing_page(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let (vehicles, rooftops) = tokio::join!(state.api.list_vehicles(), state.api.list_rooftops());
    let (vehicles, rooftops) = match (vehicles, rooftops) {
        (Ok(vehicles), Ok(rooftops)) => (vehicles, rooftops),
        (vehicles, rooftops) => {
            if let Err(e) = vehicles {
                warn!(request_id = %context.request_id, "Listing could not load vehicles: {}", e);
            }
            if let Err(e) = rooftops {
                warn!(request_id = %context.request_id, "Listing could not load rooftops: {}", e);
            }
            (Vec::new(), Vec::new())
        }
    };

    let listing = ListingPage::from_params(vehicles, rooftops, &params, state.config.table.page_size);
    page(render_listing(&listing))
}

fn render_listing(listing: &ListingPage) -> AppResult<axum::response::Html<String>> {
    let links = TableLinks {
        base: "/",
        scope: listing.scope_pairs(),
        search_placeholder: "Search vehicles...",
        empty_message: "No vehicles found.",
    };
    let view = listing.view();
    let table = build_table(VEHICLE_COLUMNS, listing.table(), &view, &links, |vehicle: &Vehicle| {
        ActionLink::vehicle_actions(vehicle.id)
    });

    // Switching rooftop keeps the search and sort but starts from page one
    let carried: Vec<(&str, String)> = listing
        .table()
        .query_pairs()
        .into_iter()
        .filter(|(name, _)| *name != "page")
        .collect();
    let filters = listing
        .rooftop_filters()
        .into_iter()
        .map(|filter| {
            let mut pairs = Vec::new();
            if let Some(id) = filter.id {
                pairs.push(("rooftop", id.to_string()));
            }
            pairs.extend(carried.iter().cloned());
            SidebarLink {
                label: filter.label,
                href: href("/", &pairs),
                selected: filter.selected,
            }
        })
        .collect();

    render(&ListingTemplate { filters, table })
}
