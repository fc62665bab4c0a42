//! Web utility functions

use axum::http::StatusCode;
use tracing::{info, warn};

use super::extractors::RequestContext;

/// Log an incoming HTTP request
pub fn log_request(context: &RequestContext) {
    info!(
        method = %context.method,
        uri = %context.uri,
        request_id = %context.request_id,
        user_agent = ?context.user_agent,
        real_ip = ?context.real_ip,
        "HTTP request"
    );
}

/// Log the outcome of a request that did not render its page
pub fn log_response(context: &RequestContext, status: StatusCode) {
    let elapsed_ms = (chrono::Utc::now() - context.timestamp).num_milliseconds();
    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %context.method,
            uri = %context.uri,
            status = status.as_u16(),
            request_id = %context.request_id,
            duration_ms = elapsed_ms,
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %context.method,
            uri = %context.uri,
            status = status.as_u16(),
            request_id = %context.request_id,
            duration_ms = elapsed_ms,
            "HTTP request completed"
        );
    }
}

/// Percent-encode query pairs into `base?k=v&...`
///
/// Returns `base` unchanged when there are no pairs.
pub fn href(base: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return base.to_string();
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}

/// Parse a numeric path segment
pub fn parse_id(segment: &str) -> Option<i64> {
    segment.trim().parse::<i64>().ok()
}
