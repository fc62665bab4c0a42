//! Vehicle page handlers: detail, create, edit and delete
//!
//! Form posts follow post/redirect/get. A rejected draft re-renders the
//! form with 422 and its field errors; a failed API call re-renders it with
//! 502 and a static retry message.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tracing::{info, warn};

use crate::forms::{FormMode, VehicleDraft, VehicleForm};
use crate::models::{Rooftop, Vehicle};
use crate::pages::{
    media_table, DeletePage, MediaState, MediaTab, VehicleParams, VehiclePage, IMAGE_COLUMNS,
    LOAD_FAILED_MESSAGE, SPIN_COLUMNS, VIDEO_COLUMNS,
};
use crate::table::{ColumnSpec, TableParams, Tabular};
use crate::web::{
    extractors::RequestContext,
    responses::{html_error, not_found_page, page},
    templates::{render, DeleteTemplate, TabHtml, VehicleFormTemplate, VehicleTemplate},
    utils::{href, log_request, log_response, parse_id},
    views::{build_table, TableHtml, TableLinks},
    AppState,
};

const NOT_FOUND: &str = "Vehicle not found";
const CREATE_FAILED: &str = "Failed to create vehicle. Please try again.";
const UPDATE_FAILED: &str = "Failed to update vehicle. Please try again.";

/// Vehicle and rooftops, or the not-found page
async fn load_vehicle(
    state: &AppState,
    id: &str,
    context: &RequestContext,
) -> Result<(Vehicle, Vec<Rooftop>), Response> {
    let Some(id) = parse_id(id) else {
        return Err(not_found_page(NOT_FOUND));
    };

    let (vehicle, rooftops) = tokio::join!(state.api.get_vehicle(id), state.api.list_rooftops());
    match (vehicle, rooftops) {
        (Ok(vehicle), Ok(rooftops)) => Ok((vehicle, rooftops)),
        (Err(e), _) | (_, Err(e)) => {
            warn!(request_id = %context.request_id, vehicle_id = id, "Vehicle page failed to load: {}", e);
            Err(not_found_page(NOT_FOUND))
        }
    }
}

/// Rooftops for the form's select; an empty list if they cannot be fetched
async fn load_rooftops(state: &AppState, context: &RequestContext) -> Vec<Rooftop> {
    match state.api.list_rooftops().await {
        Ok(rooftops) => rooftops,
        Err(e) => {
            warn!(request_id = %context.request_id, "Could not load rooftops for vehicle form: {}", e);
            Vec::new()
        }
    }
}

struct MediaHtml {
    failed: bool,
    empty: bool,
    table: TableHtml,
}

fn media_html<R: Tabular>(
    media: MediaState<R>,
    columns: &[ColumnSpec<R::Field>],
    params: &TableParams,
    page_size: usize,
    links: &TableLinks<'_>,
) -> MediaHtml {
    if media.is_failed() {
        return MediaHtml {
            failed: true,
            empty: false,
            table: TableHtml::default(),
        };
    }

    let rows = media.rows();
    if rows.is_empty() {
        return MediaHtml {
            failed: false,
            empty: true,
            table: TableHtml::default(),
        };
    }

    let (table_state, view) = media_table(columns, rows, params, page_size);
    MediaHtml {
        failed: false,
        empty: false,
        table: build_table(columns, &table_state, &view, links, |_: &R| Vec::new()),
    }
}

/// Fetch and lay out only the active tab's collection
async fn load_media(state: &AppState, vehicle_id: i64, tab: MediaTab, params: &TableParams) -> MediaHtml {
    let base = format!("/vehicles/{}", vehicle_id);
    let links = TableLinks {
        base: &base,
        scope: vec![("tab", tab.name().to_string())],
        search_placeholder: "Search...",
        empty_message: "No results found.",
    };
    let page_size = state.config.table.media_page_size;

    match tab {
        MediaTab::Images => {
            let media = MediaState::from_result(state.api.list_images(vehicle_id).await);
            media_html(media, IMAGE_COLUMNS, params, page_size, &links)
        }
        MediaTab::Videos => {
            let media = MediaState::from_result(state.api.list_videos(vehicle_id).await);
            media_html(media, VIDEO_COLUMNS, params, page_size, &links)
        }
        MediaTab::Spins => {
            let media = MediaState::from_result(state.api.list_spins(vehicle_id).await);
            media_html(media, SPIN_COLUMNS, params, page_size, &links)
        }
    }
}

/// `GET /vehicles/:id`
pub async fn vehicle_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<VehicleParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let (vehicle, rooftops) = match load_vehicle(&state, &id, &context).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    let detail = VehiclePage::new(vehicle, &rooftops, params.tab());
    let vehicle_id = detail.vehicle().id;
    let media = load_media(&state, vehicle_id, detail.tab(), &params.table()).await;

    let tabs = detail
        .tabs()
        .into_iter()
        .map(|link| TabHtml {
            label: link.label.to_string(),
            href: href(
                &format!("/vehicles/{}", vehicle_id),
                &[("tab", link.name.to_string())],
            ),
            active: link.active,
        })
        .collect();

    page(render(&VehicleTemplate {
        title: detail.vehicle().title(),
        vehicle: detail.vehicle().clone(),
        rooftop_name: detail.rooftop_name().to_string(),
        tabs,
        media_failed: media.failed,
        failed_message: LOAD_FAILED_MESSAGE.to_string(),
        media_empty: media.empty,
        empty_message: detail.tab().empty_message().to_string(),
        table: media.table,
    }))
}

fn form_page(
    status: StatusCode,
    heading: &str,
    action: String,
    cancel_href: String,
    form: &VehicleForm,
    rooftops: &[Rooftop],
) -> Response {
    let template = VehicleFormTemplate::new(heading, action, cancel_href, form, rooftops);
    match render(&template) {
        Ok(html) => (status, html).into_response(),
        Err(e) => html_error(e),
    }
}

/// `GET /vehicles/create`
pub async fn create_vehicle_page(
    State(state): State<AppState>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let rooftops = load_rooftops(&state, &context).await;
    form_page(
        StatusCode::OK,
        "Create New Vehicle",
        "/vehicles/create".to_string(),
        "/".to_string(),
        &VehicleForm::create(),
        &rooftops,
    )
}

/// `POST /vehicles/create`
pub async fn create_vehicle(
    State(state): State<AppState>,
    context: RequestContext,
    Form(draft): Form<VehicleDraft>,
) -> Response {
    log_request(&context);

    let mut form = VehicleForm::with_draft(FormMode::Create, draft);
    let status = match form.begin_submit() {
        None => StatusCode::UNPROCESSABLE_ENTITY,
        Some(record) => match state.api.create_vehicle(&record).await {
            Ok(vehicle) => {
                form.finish_submit(Ok(()));
                info!(request_id = %context.request_id, vehicle_id = vehicle.id, "Vehicle created");
                log_response(&context, StatusCode::SEE_OTHER);
                return Redirect::to(&format!("/vehicles/{}", vehicle.id)).into_response();
            }
            Err(e) => {
                warn!(request_id = %context.request_id, "Vehicle create failed: {}", e);
                form.finish_submit(Err(CREATE_FAILED.to_string()));
                StatusCode::BAD_GATEWAY
            }
        },
    };

    log_response(&context, status);
    let rooftops = load_rooftops(&state, &context).await;
    form_page(
        status,
        "Create New Vehicle",
        "/vehicles/create".to_string(),
        "/".to_string(),
        &form,
        &rooftops,
    )
}

/// `GET /vehicles/:id/edit`
pub async fn edit_vehicle_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let (vehicle, rooftops) = match load_vehicle(&state, &id, &context).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    form_page(
        StatusCode::OK,
        "Edit Vehicle",
        format!("/vehicles/{}/edit", vehicle.id),
        format!("/vehicles/{}", vehicle.id),
        &VehicleForm::edit(&vehicle),
        &rooftops,
    )
}

/// `POST /vehicles/:id/edit`
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    context: RequestContext,
    Form(draft): Form<VehicleDraft>,
) -> Response {
    log_request(&context);

    let Some(id) = parse_id(&id) else {
        return not_found_page(NOT_FOUND);
    };

    let mut form = VehicleForm::with_draft(FormMode::Edit(id), draft);
    let status = match form.begin_submit() {
        None => StatusCode::UNPROCESSABLE_ENTITY,
        Some(record) => match state.api.update_vehicle(id, &record).await {
            Ok(()) => {
                form.finish_submit(Ok(()));
                info!(request_id = %context.request_id, vehicle_id = id, "Vehicle updated");
                log_response(&context, StatusCode::SEE_OTHER);
                return Redirect::to(&format!("/vehicles/{}", id)).into_response();
            }
            Err(e) => {
                warn!(request_id = %context.request_id, vehicle_id = id, "Vehicle update failed: {}", e);
                form.finish_submit(Err(UPDATE_FAILED.to_string()));
                StatusCode::BAD_GATEWAY
            }
        },
    };

    log_response(&context, status);
    let rooftops = load_rooftops(&state, &context).await;
    form_page(
        status,
        "Edit Vehicle",
        format!("/vehicles/{}/edit", id),
        format!("/vehicles/{}", id),
        &form,
        &rooftops,
    )
}

fn delete_page(status: StatusCode, delete: &DeletePage) -> Response {
    let template = DeleteTemplate {
        vehicle: delete.vehicle().clone(),
        title: delete.vehicle().title(),
        rooftop_name: delete.rooftop_name().to_string(),
        has_error: delete.error().is_some(),
        error: delete.error().unwrap_or_default().to_string(),
    };
    match render(&template) {
        Ok(html) => (status, html).into_response(),
        Err(e) => html_error(e),
    }
}

/// `GET /vehicles/:id/delete`
pub async fn delete_vehicle_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    match load_vehicle(&state, &id, &context).await {
        Ok((vehicle, rooftops)) => delete_page(StatusCode::OK, &DeletePage::new(vehicle, &rooftops)),
        Err(response) => response,
    }
}

/// `POST /vehicles/:id/delete`
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let Some(vehicle_id) = parse_id(&id) else {
        return not_found_page(NOT_FOUND);
    };

    match state.api.delete_vehicle(vehicle_id).await {
        Ok(()) => {
            info!(request_id = %context.request_id, vehicle_id, "Vehicle deleted");
            log_response(&context, StatusCode::SEE_OTHER);
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warn!(request_id = %context.request_id, vehicle_id, "Vehicle delete failed: {}", e);
            log_response(&context, StatusCode::BAD_GATEWAY);
            match load_vehicle(&state, &id, &context).await {
                Ok((vehicle, rooftops)) => {
                    let mut delete = DeletePage::new(vehicle, &rooftops);
                    delete.delete_failed();
                    delete_page(StatusCode::BAD_GATEWAY, &delete)
                }
                Err(response) => response,
            }
        }
    }
}
