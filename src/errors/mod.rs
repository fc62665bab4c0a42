//! Centralized error handling for the dealer front end
//!
//! # Error Categories
//!
//! - **Client Errors**: inventory API transport failures and missing entities
//! - **Validation Errors**: vehicle form rule violations, reported per field
//! - **Application Errors**: configuration and template faults
//!
//! # Usage
//!
//! ```rust
//! use dealer_ui::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::internal("not ready"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for inventory API Results
pub type ClientResult<T> = Result<T, ClientError>;
