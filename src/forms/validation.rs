//! Vehicle draft validation
//!
//! Every field is required and checked after trimming. Years must fall
//! between 1900 and two years past the current calendar year.

use chrono::{Datelike, Utc};

use super::{FieldErrors, FormField, VehicleDraft};
use crate::errors::ValidationError;
use crate::models::{ListingType, VehicleRecord};

pub const MIN_YEAR: i32 = 1900;
pub const YEARS_AHEAD: i32 = 2;

fn current_year() -> i32 {
    Utc::now().year()
}

/// Validate against the current UTC year
pub fn validate(draft: &VehicleDraft) -> FieldErrors {
    validate_for_year(draft, current_year())
}

/// Validate with an explicit reference year
pub fn validate_for_year(draft: &VehicleDraft, current_year: i32) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let required = [
        (FormField::Make, "Make is required"),
        (FormField::Model, "Model is required"),
        (FormField::Trim, "Trim is required"),
        (FormField::BodyType, "Body type is required"),
        (FormField::ExtColor, "Exterior color is required"),
    ];
    for (field, message) in required {
        if draft.get(field).trim().is_empty() {
            errors.insert(field, message);
        }
    }

    let year = draft.year.trim();
    if year.is_empty() {
        errors.insert(FormField::Year, "Year is required");
    } else if parse_year(year, current_year).is_none() {
        errors.insert(FormField::Year, "Please enter a valid year");
    }

    let listing_type = draft.veh_listing_type.trim();
    if listing_type.is_empty() {
        errors.insert(FormField::ListingType, "Listing type is required");
    } else if ListingType::from_name(listing_type).is_none() {
        errors.insert(FormField::ListingType, "Listing type must be New or Used");
    }

    let rooftop_id = draft.rooftop_id.trim();
    if rooftop_id.is_empty() {
        errors.insert(FormField::RooftopId, "Rooftop is required");
    } else if rooftop_id.parse::<i64>().is_err() {
        errors.insert(FormField::RooftopId, "Please select a valid rooftop");
    }

    errors
}

fn parse_year(year: &str, current_year: i32) -> Option<i32> {
    year.parse::<i32>()
        .ok()
        .filter(|year| (MIN_YEAR..=current_year + YEARS_AHEAD).contains(year))
}

/// Trim and parse a draft, against the current UTC year
pub fn normalize(draft: &VehicleDraft) -> Result<VehicleRecord, ValidationError> {
    normalize_for_year(draft, current_year())
}

/// Trim and parse a draft into an API record
///
/// Fails with the complete error map rather than producing a partially
/// parsed record.
pub fn normalize_for_year(
    draft: &VehicleDraft,
    current_year: i32,
) -> Result<VehicleRecord, ValidationError> {
    let errors = validate_for_year(draft, current_year);
    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    let (year, veh_listing_type, rooftop_id) = match (
        parse_year(draft.year.trim(), current_year),
        ListingType::from_name(draft.veh_listing_type.trim()),
        draft.rooftop_id.trim().parse::<i64>().ok(),
    ) {
        (Some(year), Some(listing_type), Some(rooftop_id)) => (year, listing_type, rooftop_id),
        // validate_for_year rejects every draft that reaches this arm
        _ => return Err(ValidationError { errors }),
    };

    Ok(VehicleRecord {
        make: draft.make.trim().to_string(),
        model: draft.model.trim().to_string(),
        trim: draft.trim.trim().to_string(),
        year,
        veh_listing_type,
        body_type: draft.body_type.trim().to_string(),
        ext_color: draft.ext_color.trim().to_string(),
        rooftop_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> VehicleDraft {
        VehicleDraft {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            trim: "EX".to_string(),
            year: "2023".to_string(),
            veh_listing_type: "New".to_string(),
            body_type: "Sedan".to_string(),
            ext_color: "Blue".to_string(),
            rooftop_id: "1".to_string(),
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut draft = valid_draft();
        draft.model = "   ".to_string();
        let errors = validate_for_year(&draft, 2025);
        assert_eq!(errors.get(FormField::Model), Some("Model is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_year_window_tracks_reference_year() {
        let mut draft = valid_draft();
        draft.year = "2027".to_string();
        assert!(validate_for_year(&draft, 2025).is_empty());
        assert!(validate_for_year(&draft, 2024).contains(FormField::Year));

        draft.year = "1900".to_string();
        assert!(validate_for_year(&draft, 2025).is_empty());
    }

    #[test]
    fn test_year_must_be_a_whole_number() {
        let mut draft = valid_draft();
        for year in ["2023abc", "20.5", "year"] {
            draft.year = year.to_string();
            let errors = validate_for_year(&draft, 2025);
            assert_eq!(errors.get(FormField::Year), Some("Please enter a valid year"));
        }
    }

    #[test]
    fn test_listing_type_and_rooftop_formats() {
        let mut draft = valid_draft();
        draft.veh_listing_type = "Demo".to_string();
        draft.rooftop_id = "abc".to_string();
        let errors = validate_for_year(&draft, 2025);
        assert_eq!(
            errors.get(FormField::ListingType),
            Some("Listing type must be New or Used")
        );
        assert_eq!(
            errors.get(FormField::RooftopId),
            Some("Please select a valid rooftop")
        );
    }

    #[test]
    fn test_normalize_trims_and_parses() {
        let mut draft = valid_draft();
        draft.make = "  Honda ".to_string();
        draft.year = " 2023 ".to_string();
        draft.rooftop_id = " 12".to_string();

        let record = normalize_for_year(&draft, 2025).unwrap();
        assert_eq!(record.make, "Honda");
        assert_eq!(record.year, 2023);
        assert_eq!(record.rooftop_id, 12);
    }

    #[test]
    fn test_normalize_rejects_invalid_draft() {
        let err = normalize_for_year(&VehicleDraft::default(), 2025).unwrap_err();
        assert_eq!(err.errors.len(), FormField::ALL.len());
    }
}
