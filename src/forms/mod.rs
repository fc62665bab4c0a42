//! Vehicle create/edit form
//!
//! A [`VehicleDraft`] holds the raw text of every input. Validation turns a
//! draft into either a [`FieldErrors`] map for inline display or a
//! [`VehicleRecord`](crate::models::VehicleRecord) ready to send to the API.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::Vehicle;

pub mod state;
pub mod validation;

pub use state::{FormMode, FormPhase, SelectOption, VehicleForm};
pub use validation::{normalize, normalize_for_year, validate, validate_for_year};

/// Form-local copy of a vehicle, every field as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub trim: String,
    pub year: String,
    pub veh_listing_type: String,
    pub body_type: String,
    pub ext_color: String,
    pub rooftop_id: String,
}

impl VehicleDraft {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            trim: vehicle.trim.clone(),
            year: vehicle.year.to_string(),
            veh_listing_type: vehicle.veh_listing_type.to_string(),
            body_type: vehicle.body_type.clone(),
            ext_color: vehicle.ext_color.clone(),
            rooftop_id: vehicle.rooftop_id.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Make => &self.make,
            FormField::Model => &self.model,
            FormField::Trim => &self.trim,
            FormField::Year => &self.year,
            FormField::ListingType => &self.veh_listing_type,
            FormField::BodyType => &self.body_type,
            FormField::ExtColor => &self.ext_color,
            FormField::RooftopId => &self.rooftop_id,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Make => self.make = value,
            FormField::Model => self.model = value,
            FormField::Trim => self.trim = value,
            FormField::Year => self.year = value,
            FormField::ListingType => self.veh_listing_type = value,
            FormField::BodyType => self.body_type = value,
            FormField::ExtColor => self.ext_color = value,
            FormField::RooftopId => self.rooftop_id = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Make,
    Model,
    Trim,
    Year,
    #[serde(rename = "veh_listing_type")]
    ListingType,
    BodyType,
    ExtColor,
    RooftopId,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Make,
        FormField::Model,
        FormField::Trim,
        FormField::Year,
        FormField::ListingType,
        FormField::BodyType,
        FormField::ExtColor,
        FormField::RooftopId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Make => "make",
            FormField::Model => "model",
            FormField::Trim => "trim",
            FormField::Year => "year",
            FormField::ListingType => "veh_listing_type",
            FormField::BodyType => "body_type",
            FormField::ExtColor => "ext_color",
            FormField::RooftopId => "rooftop_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Make => "Make",
            FormField::Model => "Model",
            FormField::Trim => "Trim",
            FormField::Year => "Year",
            FormField::ListingType => "Listing Type",
            FormField::BodyType => "Body Type",
            FormField::ExtColor => "Exterior Color",
            FormField::RooftopId => "Rooftop",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Per-field validation messages; passing fields have no entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FormField, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a FormField, &'a String);
    type IntoIter = btree_map::Iter<'a, FormField, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingType;

    #[test]
    fn test_draft_from_vehicle_stringifies_numbers() {
        let vehicle = Vehicle {
            id: 5,
            make: "Ford".to_string(),
            model: "F-150".to_string(),
            trim: "XLT".to_string(),
            year: 2021,
            veh_listing_type: ListingType::Used,
            body_type: "Truck".to_string(),
            ext_color: "Red".to_string(),
            rooftop_id: 3,
        };

        let draft = VehicleDraft::from_vehicle(&vehicle);
        assert_eq!(draft.year, "2021");
        assert_eq!(draft.rooftop_id, "3");
        assert_eq!(draft.get(FormField::ListingType), "Used");
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::ListingType, "Listing type is required");
        errors.insert(FormField::Make, "Make is required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["veh_listing_type"], "Listing type is required");
        assert_eq!(json["make"], "Make is required");
        assert_eq!(
            errors.to_string(),
            "make: Make is required; veh_listing_type: Listing type is required"
        );
    }

    #[test]
    fn test_form_field_names() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("vin"), None);
    }
}
