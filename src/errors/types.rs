//! Error type definitions for the dealer front end
//!
//! Three families of failure reach the web layer:
//! - **Validation**: a submitted vehicle draft broke one or more field rules
//! - **Client**: the inventory API could not be reached, answered with a
//!   non-success status, or does not know the requested entity
//! - **Application**: configuration, template and other internal faults

use std::fmt;
use thiserror::Error;

use crate::forms::FieldErrors;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Inventory API errors
    #[error("Inventory API error: {0}")]
    Client(#[from] ClientError),

    /// Vehicle form validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// A draft that failed one or more field rules
///
/// Carries the full per-field message map so it can be shown inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {errors}")]
pub struct ValidationError {
    pub errors: FieldErrors,
}

/// What a failed API call was trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Fetch => "fetch",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// Inventory API errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// The API answered 404 for a single entity
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Network failure, non-success status, or an undecodable body
    #[error("Failed to {action} {entity}: {message}")]
    Transport {
        action: Action,
        entity: &'static str,
        message: String,
    },

    /// The client could not be built from its configuration
    #[error("Invalid API configuration: {message}")]
    Configuration { message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl ClientError {
    /// Create a transport error
    pub fn transport<M: Into<String>>(action: Action, entity: &'static str, message: M) -> Self {
        Self::Transport {
            action,
            entity,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Create a configuration error
    pub fn configuration<M: Into<String>>(message: M) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Static message suitable for showing to the user
    ///
    /// Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, .. } => {
                let mut chars = resource.chars();
                match chars.next() {
                    Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
                    None => "Not found".to_string(),
                }
            }
            Self::Transport { action, entity, .. } => format!("Failed to {} {}.", action, entity),
            Self::Configuration { .. } => "The inventory service is not configured.".to_string(),
        }
    }
}
