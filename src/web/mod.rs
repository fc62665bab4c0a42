//! Web layer module
//!
//! Server-rendered pages over the inventory API, plus a small JSON API
//! exposing the same tables.
//!
//! # Architecture
//!
//! - **Handlers**: one module per page, thin over the page reducers
//! - **Views**: table markup models built from table state
//! - **Templates**: askama structs for each page
//! - **Responses**: the JSON envelope and error mapping
//! - **Extractors**: per-request logging context

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{client::InventoryApi, config::Config};

pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod templates;
pub mod utils;
pub mod views;

pub use extractors::RequestContext;
pub use responses::{handle_error, ApiResponse, PaginatedResponse};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, api: Arc<dyn InventoryApi>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState { api, config });

        Ok(Self { app, addr })
    }

    /// Serve until Ctrl+C
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Web server listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Received Ctrl+C, shutting down gracefully");
                }
            })
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_v1_routes())
        // Pages
        .route("/", get(handlers::listing::listing_page))
        .route("/rooftops/:id", get(handlers::rooftops::rooftop_page))
        .route(
            "/vehicles/create",
            get(handlers::vehicles::create_vehicle_page).post(handlers::vehicles::create_vehicle),
        )
        .route("/vehicles/:id", get(handlers::vehicles::vehicle_page))
        .route(
            "/vehicles/:id/edit",
            get(handlers::vehicles::edit_vehicle_page).post(handlers::vehicles::update_vehicle),
        )
        .route(
            "/vehicles/:id/delete",
            get(handlers::vehicles::delete_vehicle_page).post(handlers::vehicles::delete_vehicle),
        )
        // Static assets
        .route("/static/*path", get(handlers::static_assets::serve_static_asset))
        .fallback(handlers::fallback::fallback)
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(handlers::api::list_vehicles))
        .route("/vehicles/validate", post(handlers::api::validate_vehicle))
        .route("/vehicles/:id/:tab", get(handlers::api::list_vehicle_media))
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn InventoryApi>,
    pub config: Config,
}
