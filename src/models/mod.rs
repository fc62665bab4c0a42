use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::{CellValue, FieldKey, Tabular};

pub mod media;

pub use media::{ImageField, SpinField, VehicleImage, VehicleSpin, VehicleVideo, VideoField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    New,
    Used,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::New, ListingType::Used];

    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::New => "New",
            ListingType::Used => "Used",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub year: i32,
    pub veh_listing_type: ListingType,
    pub body_type: String,
    pub ext_color: String,
    pub rooftop_id: i64,
}

impl Vehicle {
    /// "2023 Honda Civic EX"
    pub fn title(&self) -> String {
        format!("{} {} {} {}", self.year, self.make, self.model, self.trim)
    }
}

/// Vehicle payload for create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub trim: String,
    pub year: i32,
    pub veh_listing_type: ListingType,
    pub body_type: String,
    pub ext_color: String,
    pub rooftop_id: i64,
}

impl VehicleRecord {
    pub fn with_id(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            trim: self.trim,
            year: self.year,
            veh_listing_type: self.veh_listing_type,
            body_type: self.body_type,
            ext_color: self.ext_color,
            rooftop_id: self.rooftop_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    Id,
    Make,
    Model,
    Trim,
    Year,
    ListingType,
    BodyType,
    ExtColor,
    RooftopId,
}

impl FieldKey for VehicleField {
    const ALL: &'static [Self] = &[
        VehicleField::Id,
        VehicleField::Make,
        VehicleField::Model,
        VehicleField::Trim,
        VehicleField::Year,
        VehicleField::ListingType,
        VehicleField::BodyType,
        VehicleField::ExtColor,
        VehicleField::RooftopId,
    ];

    fn name(self) -> &'static str {
        match self {
            VehicleField::Id => "id",
            VehicleField::Make => "make",
            VehicleField::Model => "model",
            VehicleField::Trim => "trim",
            VehicleField::Year => "year",
            VehicleField::ListingType => "veh_listing_type",
            VehicleField::BodyType => "body_type",
            VehicleField::ExtColor => "ext_color",
            VehicleField::RooftopId => "rooftop_id",
        }
    }
}

impl Tabular for Vehicle {
    type Field = VehicleField;

    fn value(&self, field: VehicleField) -> CellValue {
        match field {
            VehicleField::Id => self.id.into(),
            VehicleField::Make => self.make.as_str().into(),
            VehicleField::Model => self.model.as_str().into(),
            VehicleField::Trim => self.trim.as_str().into(),
            VehicleField::Year => self.year.into(),
            VehicleField::ListingType => self.veh_listing_type.as_str().into(),
            VehicleField::BodyType => self.body_type.as_str().into(),
            VehicleField::ExtColor => self.ext_color.as_str().into(),
            VehicleField::RooftopId => self.rooftop_id.into(),
        }
    }
}

/// A dealership location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rooftop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RooftopRecord {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: String,
}

/// Display name of a rooftop, falling back to "Rooftop {id}" when unknown
pub fn rooftop_name(rooftops: &[Rooftop], id: i64) -> String {
    rooftops
        .iter()
        .find(|rooftop| rooftop.id == id)
        .map(|rooftop| rooftop.name.clone())
        .unwrap_or_else(|| format!("Rooftop {}", id))
}
