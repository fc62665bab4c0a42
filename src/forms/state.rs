//! Submission lifecycle of the vehicle form
//!
//! ```text
//! Idle -> Validating -> Idle        (errors shown)
//!                    -> Submitting -> Succeeded
//!                                  -> Idle (submit error shown)
//! ```

use chrono::{Datelike, Utc};

use super::{normalize_for_year, FieldErrors, FormField, VehicleDraft};
use crate::models::{ListingType, Rooftop, Vehicle, VehicleRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

/// One `<option>` of a select input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleForm {
    mode: FormMode,
    draft: VehicleDraft,
    errors: FieldErrors,
    phase: FormPhase,
    submit_error: Option<String>,
}

impl VehicleForm {
    /// Empty form for a new vehicle
    pub fn create() -> Self {
        Self::with_draft(FormMode::Create, VehicleDraft::default())
    }

    /// Form pre-populated from an existing vehicle
    pub fn edit(vehicle: &Vehicle) -> Self {
        Self::with_draft(FormMode::Edit(vehicle.id), VehicleDraft::from_vehicle(vehicle))
    }

    pub fn with_draft(mode: FormMode, draft: VehicleDraft) -> Self {
        Self {
            mode,
            draft,
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
            submit_error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &VehicleDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Inputs are disabled while a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn save_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Vehicle",
            FormMode::Edit(_) => "Update Vehicle",
        }
    }

    /// Edit one input, dropping its error until the next submit
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.remove(field);
    }

    /// Validate and, if clean, move to `Submitting`
    ///
    /// Returns the record to send, or `None` when the draft is invalid or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<VehicleRecord> {
        self.begin_submit_for_year(Utc::now().year())
    }

    pub fn begin_submit_for_year(&mut self, current_year: i32) -> Option<VehicleRecord> {
        if self.is_busy() {
            return None;
        }

        self.phase = FormPhase::Validating;
        self.submit_error = None;

        match normalize_for_year(&self.draft, current_year) {
            Ok(record) => {
                self.errors.clear();
                self.phase = FormPhase::Submitting;
                Some(record)
            }
            Err(invalid) => {
                self.errors = invalid.errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// Record the outcome of the API call started by `begin_submit`
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }

        match outcome {
            Ok(()) => self.phase = FormPhase::Succeeded,
            Err(message) => {
                self.submit_error = Some(message);
                self.phase = FormPhase::Idle;
            }
        }
    }

    pub fn listing_type_options(&self) -> Vec<SelectOption> {
        let current = self.draft.veh_listing_type.trim();
        ListingType::ALL
            .into_iter()
            .map(|kind| SelectOption {
                value: kind.as_str().to_string(),
                label: kind.as_str().to_string(),
                selected: kind.as_str() == current,
            })
            .collect()
    }

    pub fn rooftop_options(&self, rooftops: &[Rooftop]) -> Vec<SelectOption> {
        let current = self.draft.rooftop_id.trim();
        rooftops
            .iter()
            .map(|rooftop| {
                let value = rooftop.id.to_string();
                SelectOption {
                    selected: value == current,
                    value,
                    label: rooftop.name.clone(),
                }
            })
            .collect()
    }
}
