//! Shared fixtures and an in-memory inventory API
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use dealer_ui::client::InventoryApi;
use dealer_ui::config::Config;
use dealer_ui::errors::{Action, ClientError, ClientResult};
use dealer_ui::models::{
    ListingType, Rooftop, RooftopRecord, Vehicle, VehicleImage, VehicleRecord, VehicleSpin,
    VehicleVideo,
};
use dealer_ui::table::CellValue;
use dealer_ui::web::{create_router, AppState};

pub fn vehicle(id: i64, make: &str, model: &str, year: i32, rooftop_id: i64) -> Vehicle {
    Vehicle {
        id,
        make: make.to_string(),
        model: model.to_string(),
        trim: "Base".to_string(),
        year,
        veh_listing_type: if id % 2 == 0 {
            ListingType::New
        } else {
            ListingType::Used
        },
        body_type: "Sedan".to_string(),
        ext_color: "White".to_string(),
        rooftop_id,
    }
}

pub fn rooftop(id: i64, name: &str) -> Rooftop {
    Rooftop {
        id,
        name: name.to_string(),
        street: "100 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        phone: "555-0100".to_string(),
        email: format!("rooftop{}@example.com", id),
    }
}

/// Twelve vehicles with distinct years 2010..=2021 spread over two rooftops
pub fn twelve_vehicles() -> Vec<Vehicle> {
    let makes = ["Honda", "Toyota", "Ford"];
    (1..=12)
        .map(|id| {
            let make = makes[(id as usize) % makes.len()];
            vehicle(id, make, "Model", 2009 + id as i32, 1 + id % 2)
        })
        .collect()
}

pub fn image(id: i64, width: i64) -> VehicleImage {
    VehicleImage {
        id,
        image_group_id: CellValue::Int(1),
        image_width: CellValue::Int(width),
        image_height: CellValue::Int(width * 3 / 4),
        image_url: Some(format!("https://cdn.example.com/{}.jpg", id)),
    }
}

#[derive(Default)]
pub struct FakeInventory {
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub rooftops: Mutex<Vec<Rooftop>>,
    pub images: Mutex<Vec<VehicleImage>>,
    pub videos: Mutex<Vec<VehicleVideo>>,
    pub spins: Mutex<Vec<VehicleSpin>>,
    /// Every call fails with a transport error
    pub offline: AtomicBool,
    /// Only create, update and delete fail
    pub reject_writes: AtomicBool,
    /// Only media calls fail
    pub media_offline: AtomicBool,
}

impl FakeInventory {
    pub fn new(vehicles: Vec<Vehicle>, rooftops: Vec<Rooftop>) -> Self {
        Self {
            vehicles: Mutex::new(vehicles),
            rooftops: Mutex::new(rooftops),
            ..Default::default()
        }
    }

    pub fn with_images(self, images: Vec<VehicleImage>) -> Self {
        *self.images.lock().unwrap() = images;
        self
    }

    fn check(&self, action: Action, entity: &'static str) -> ClientResult<()> {
        let offline = self.offline.load(Ordering::SeqCst)
            || (action != Action::Fetch && self.reject_writes.load(Ordering::SeqCst));
        if offline {
            Err(ClientError::transport(action, entity, "connection refused"))
        } else {
            Ok(())
        }
    }

    fn check_media(&self, entity: &'static str) -> ClientResult<()> {
        self.check(Action::Fetch, entity)?;
        if self.media_offline.load(Ordering::SeqCst) {
            return Err(ClientError::transport(Action::Fetch, entity, "HTTP error: 500"));
        }
        Ok(())
    }

    pub fn vehicle_by_id(&self, id: i64) -> Option<Vehicle> {
        self.vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|vehicle| vehicle.id == id)
            .cloned()
    }
}

#[async_trait]
impl InventoryApi for FakeInventory {
    async fn list_vehicles(&self) -> ClientResult<Vec<Vehicle>> {
        self.check(Action::Fetch, "vehicles")?;
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn get_vehicle(&self, id: i64) -> ClientResult<Vehicle> {
        self.check(Action::Fetch, "vehicle")?;
        self.vehicle_by_id(id)
            .ok_or_else(|| ClientError::not_found("vehicle", id))
    }

    async fn create_vehicle(&self, record: &VehicleRecord) -> ClientResult<Vehicle> {
        self.check(Action::Create, "vehicle")?;
        let mut vehicles = self.vehicles.lock().unwrap();
        let id = vehicles.iter().map(|vehicle| vehicle.id).max().unwrap_or(0) + 1;
        let vehicle = record.clone().with_id(id);
        vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update_vehicle(&self, id: i64, record: &VehicleRecord) -> ClientResult<()> {
        self.check(Action::Update, "vehicle")?;
        let mut vehicles = self.vehicles.lock().unwrap();
        let slot = vehicles
            .iter_mut()
            .find(|vehicle| vehicle.id == id)
            .ok_or_else(|| ClientError::not_found("vehicle", id))?;
        *slot = record.clone().with_id(id);
        Ok(())
    }

    async fn delete_vehicle(&self, id: i64) -> ClientResult<()> {
        self.check(Action::Delete, "vehicle")?;
        let mut vehicles = self.vehicles.lock().unwrap();
        let before = vehicles.len();
        vehicles.retain(|vehicle| vehicle.id != id);
        if vehicles.len() == before {
            return Err(ClientError::not_found("vehicle", id));
        }
        Ok(())
    }

    async fn list_rooftops(&self) -> ClientResult<Vec<Rooftop>> {
        self.check(Action::Fetch, "rooftops")?;
        Ok(self.rooftops.lock().unwrap().clone())
    }

    async fn get_rooftop(&self, id: i64) -> ClientResult<Rooftop> {
        self.check(Action::Fetch, "rooftop")?;
        self.rooftops
            .lock()
            .unwrap()
            .iter()
            .find(|rooftop| rooftop.id == id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("rooftop", id))
    }

    async fn create_rooftop(&self, record: &RooftopRecord) -> ClientResult<Rooftop> {
        self.check(Action::Create, "rooftop")?;
        let mut rooftops = self.rooftops.lock().unwrap();
        let id = rooftops.iter().map(|rooftop| rooftop.id).max().unwrap_or(0) + 1;
        let rooftop = Rooftop {
            id,
            name: record.name.clone(),
            street: record.street.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
        };
        rooftops.push(rooftop.clone());
        Ok(rooftop)
    }

    async fn update_rooftop(&self, id: i64, record: &RooftopRecord) -> ClientResult<()> {
        self.check(Action::Update, "rooftop")?;
        let mut rooftops = self.rooftops.lock().unwrap();
        let slot = rooftops
            .iter_mut()
            .find(|rooftop| rooftop.id == id)
            .ok_or_else(|| ClientError::not_found("rooftop", id))?;
        slot.name = record.name.clone();
        slot.street = record.street.clone();
        slot.city = record.city.clone();
        slot.state = record.state.clone();
        slot.phone = record.phone.clone();
        slot.email = record.email.clone();
        Ok(())
    }

    async fn delete_rooftop(&self, id: i64) -> ClientResult<()> {
        self.check(Action::Delete, "rooftop")?;
        self.rooftops.lock().unwrap().retain(|rooftop| rooftop.id != id);
        Ok(())
    }

    async fn list_images(&self, _vehicle_id: i64) -> ClientResult<Vec<VehicleImage>> {
        self.check_media("vehicle images")?;
        Ok(self.images.lock().unwrap().clone())
    }

    async fn list_videos(&self, _vehicle_id: i64) -> ClientResult<Vec<VehicleVideo>> {
        self.check_media("vehicle videos")?;
        Ok(self.videos.lock().unwrap().clone())
    }

    async fn list_spins(&self, _vehicle_id: i64) -> ClientResult<Vec<VehicleSpin>> {
        self.check_media("vehicle 360 spins")?;
        Ok(self.spins.lock().unwrap().clone())
    }
}

/// Router over `api` with default configuration
pub fn app(api: Arc<FakeInventory>) -> Router {
    create_router(AppState {
        api,
        config: Config::default(),
    })
}
