//! Page state and reducers
//!
//! Each page owns its rows and table state for one request. User intents
//! arrive as query-string or form parameters, are replayed onto the page
//! state, and the result is handed to the web layer for rendering.

pub mod columns;
pub mod listing;
pub mod media;
pub mod rooftop;
pub mod vehicle;

pub use columns::{IMAGE_COLUMNS, SPIN_COLUMNS, VEHICLE_COLUMNS, VIDEO_COLUMNS};
pub use listing::{ListingIntent, ListingPage, ListingParams, RooftopFilter};
pub use media::{media_table, MediaState, MediaTab, TabLink, LOAD_FAILED_MESSAGE};
pub use rooftop::RooftopPage;
pub use vehicle::{DeletePage, VehicleParams, VehiclePage};
