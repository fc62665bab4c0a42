//! Request extractors

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, Method, Uri},
};
use uuid::Uuid;

/// Request context for logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub uri: Uri,
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .map(|s| s.split(',').next().unwrap_or(s).trim().to_string());

        Ok(Self {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
            user_agent,
            real_ip,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}
