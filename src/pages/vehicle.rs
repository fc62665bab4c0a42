//! Vehicle detail and delete confirmation pages

use serde::Deserialize;

use super::media::{MediaTab, TabLink};
use crate::models::{rooftop_name, Rooftop, Vehicle};
use crate::table::TableParams;

/// Query string of the detail page: the media tab plus its table state
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleParams {
    #[serde(default)]
    pub tab: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl VehicleParams {
    /// Unknown tab names fall back to the first tab
    pub fn tab(&self) -> MediaTab {
        self.tab
            .as_deref()
            .and_then(MediaTab::from_name)
            .unwrap_or_default()
    }

    pub fn table(&self) -> TableParams {
        TableParams {
            q: self.q.clone(),
            sort: self.sort.clone(),
            dir: self.dir.clone(),
            page: self.page.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VehiclePage {
    vehicle: Vehicle,
    rooftop_name: String,
    tab: MediaTab,
}

impl VehiclePage {
    pub fn new(vehicle: Vehicle, rooftops: &[Rooftop], tab: MediaTab) -> Self {
        let rooftop_name = rooftop_name(rooftops, vehicle.rooftop_id);
        Self {
            vehicle,
            rooftop_name,
            tab,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn rooftop_name(&self) -> &str {
        &self.rooftop_name
    }

    pub fn tab(&self) -> MediaTab {
        self.tab
    }

    pub fn tabs(&self) -> Vec<TabLink> {
        TabLink::strip(self.tab)
    }
}

/// Delete confirmation for one vehicle
#[derive(Debug, Clone)]
pub struct DeletePage {
    vehicle: Vehicle,
    rooftop_name: String,
    error: Option<String>,
}

impl DeletePage {
    pub const FAILED_MESSAGE: &'static str = "Failed to delete vehicle. Please try again.";

    pub fn new(vehicle: Vehicle, rooftops: &[Rooftop]) -> Self {
        let rooftop_name = rooftop_name(rooftops, vehicle.rooftop_id);
        Self {
            vehicle,
            rooftop_name,
            error: None,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn rooftop_name(&self) -> &str {
        &self.rooftop_name
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The delete call failed; the confirmation is shown again
    pub fn delete_failed(&mut self) {
        self.error = Some(Self::FAILED_MESSAGE.to_string());
    }
}
