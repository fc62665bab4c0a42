//! HTTP request handlers organized by page

pub mod api;
pub mod fallback;
pub mod health;
pub mod listing;
pub mod rooftops;
pub mod static_assets;
pub mod vehicles;
