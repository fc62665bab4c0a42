//! HTTP response types and utilities
//!
//! JSON endpoints answer with the [`ApiResponse`] envelope. HTML pages map
//! their failures through [`html_error`] so a missing vehicle renders the
//! not-found page instead of a JSON body.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, warn};

use crate::errors::{AppError, AppResult, ClientError};
use crate::forms::FieldErrors;
use crate::table::TableView;

use super::templates::{render, NotFoundTemplate};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional error details, keyed by field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_with_details(message: String, details: HashMap<String, String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: Some(details),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// One page of a table, as returned by the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Rows matching the search, across all pages
    pub total: usize,
    /// Current page number (1-based)
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// "Showing X to Y of N results"
    pub summary: String,
}

impl<T: Clone> PaginatedResponse<T> {
    pub fn from_view(view: &TableView<'_, T>) -> Self {
        Self {
            items: view.rows.iter().map(|row| (*row).clone()).collect(),
            total: view.total_rows,
            page: view.current_page,
            per_page: view.page_size,
            total_pages: view.total_pages,
            has_next: view.has_next(),
            has_previous: view.has_previous(),
            summary: view.range.summary(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_base_url: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthResponse {
    pub fn healthy(api_base_url: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_base_url: api_base_url.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

fn details_of(errors: &FieldErrors) -> HashMap<String, String> {
    errors
        .iter()
        .map(|(field, message)| (field.name().to_string(), message.clone()))
        .collect()
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message, details) = match &error {
        AppError::Client(client_error) => {
            let status = match client_error {
                ClientError::NotFound { .. } => StatusCode::NOT_FOUND,
                ClientError::Transport { .. } => StatusCode::BAD_GATEWAY,
                ClientError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, client_error.user_message(), None)
        }
        AppError::Validation(invalid) => (
            StatusCode::BAD_REQUEST,
            "Validation failed".to_string(),
            Some(details_of(&invalid.errors)),
        ),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' not found", resource, id),
            None,
        ),
        AppError::Configuration { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {}", message),
            None,
        ),
        AppError::Template(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Template rendering failed".to_string(),
            None,
        ),
        AppError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {}", message),
            None,
        ),
    };

    if status.is_server_error() {
        error!(status = %status, "Request failed: {}", error);
    } else {
        warn!(status = %status, "Request rejected: {}", error);
    }

    let response = match details {
        Some(details) => ApiResponse::<()>::error_with_details(message, details),
        None => ApiResponse::<()>::error(message),
    };

    (status, Json(response)).into_response()
}

/// Error page for HTML routes
///
/// Not-found errors render the not-found page with the error's message;
/// anything else is a bare 500.
pub fn html_error(error: AppError) -> Response {
    let message = match &error {
        AppError::Client(client_error) if client_error.is_not_found() => {
            Some(client_error.user_message())
        }
        AppError::NotFound { resource, .. } => Some(format!("{} not found", resource)),
        _ => None,
    };

    match message {
        Some(message) => not_found_page(&message),
        None => {
            error!("Page failed: {}", error);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// 404 page carrying `message`
pub fn not_found_page(message: &str) -> Response {
    let template = NotFoundTemplate {
        message: message.to_string(),
    };
    match render(&template) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, message.to_string()).into_response(),
    }
}

/// Render a page or fall back to [`html_error`]
pub fn page(result: AppResult<Html<String>>) -> Response {
    match result {
        Ok(html) => html.into_response(),
        Err(error) => html_error(error),
    }
}

/// Success response helpers
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

pub fn validation_error(errors: &FieldErrors) -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error_with_details(
            "Validation failed".to_string(),
            details_of(errors),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Action, ValidationError};
    use crate::forms::FormField;

    #[test]
    fn test_client_errors_map_to_status_codes() {
        let response = handle_error(AppError::from(ClientError::transport(
            Action::Fetch,
            "vehicles",
            "connection refused",
        )));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = handle_error(AppError::from(ClientError::not_found("vehicle", 4)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_details_use_field_names() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::ListingType, "Listing type is required");
        let details = details_of(&ValidationError { errors }.errors);
        assert_eq!(
            details.get("veh_listing_type").map(String::as_str),
            Some("Listing type is required")
        );
    }

    #[test]
    fn test_html_error_renders_not_found_for_missing_entities() {
        let response = html_error(AppError::from(ClientError::not_found("rooftop", 9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = html_error(AppError::internal("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
