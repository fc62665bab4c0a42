//! Inventory API access
//!
//! All data lives in the remote inventory service. Pages talk to it through
//! the [`InventoryApi`] trait so handlers can be exercised against an
//! in-memory implementation in tests.

use async_trait::async_trait;

use crate::errors::ClientResult;
use crate::models::{
    Rooftop, RooftopRecord, Vehicle, VehicleImage, VehicleRecord, VehicleSpin, VehicleVideo,
};

pub mod http;

pub use http::HttpInventoryClient;

#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_vehicles(&self) -> ClientResult<Vec<Vehicle>>;

    async fn get_vehicle(&self, id: i64) -> ClientResult<Vehicle>;

    /// Create a vehicle and return it with its assigned id
    async fn create_vehicle(&self, record: &VehicleRecord) -> ClientResult<Vehicle>;

    async fn update_vehicle(&self, id: i64, record: &VehicleRecord) -> ClientResult<()>;

    async fn delete_vehicle(&self, id: i64) -> ClientResult<()>;

    async fn list_rooftops(&self) -> ClientResult<Vec<Rooftop>>;

    async fn get_rooftop(&self, id: i64) -> ClientResult<Rooftop>;

    async fn create_rooftop(&self, record: &RooftopRecord) -> ClientResult<Rooftop>;

    async fn update_rooftop(&self, id: i64, record: &RooftopRecord) -> ClientResult<()>;

    async fn delete_rooftop(&self, id: i64) -> ClientResult<()>;

    async fn list_images(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleImage>>;

    async fn list_videos(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleVideo>>;

    /// 360° spins of a vehicle
    async fn list_spins(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleSpin>>;
}
