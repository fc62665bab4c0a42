//! Askama page templates
//!
//! Template structs only carry plain strings, flags and lists; everything
//! is computed by the handlers before rendering.

use askama::Template;
use axum::response::Html;

use crate::errors::AppResult;
use crate::forms::{FormField, SelectOption, VehicleForm};
use crate::models::{Rooftop, Vehicle};

use super::views::TableHtml;

/// Render a template into an HTML response body
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

#[derive(Debug, Clone)]
pub struct SidebarLink {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub filters: Vec<SidebarLink>,
    pub table: TableHtml,
}

#[derive(Template)]
#[template(path = "rooftop.html")]
pub struct RooftopTemplate {
    pub rooftop: Rooftop,
    pub vehicle_count: usize,
    pub table: TableHtml,
}

#[derive(Debug, Clone)]
pub struct TabHtml {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "vehicle.html")]
pub struct VehicleTemplate {
    pub vehicle: Vehicle,
    pub title: String,
    pub rooftop_name: String,
    pub tabs: Vec<TabHtml>,
    pub media_failed: bool,
    pub failed_message: String,
    /// The tab's collection has no rows at all, before any search
    pub media_empty: bool,
    pub empty_message: String,
    pub table: TableHtml,
}

/// One labelled input of the vehicle form
#[derive(Debug, Clone)]
pub struct FormInput {
    pub name: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: String,
    pub is_select: bool,
    pub options: Vec<SelectOption>,
    pub has_error: bool,
    pub error: String,
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Make => "e.g., Toyota",
        FormField::Model => "e.g., Camry",
        FormField::Trim => "e.g., LE",
        FormField::Year => "e.g., 2023",
        FormField::ListingType => "Select listing type",
        FormField::BodyType => "e.g., Sedan",
        FormField::ExtColor => "e.g., White",
        FormField::RooftopId => "Select rooftop",
    }
}

impl FormInput {
    /// Inputs for every form field, in display order
    pub fn for_form(form: &VehicleForm, rooftops: &[Rooftop]) -> Vec<FormInput> {
        FormField::ALL
            .into_iter()
            .map(|field| {
                let options = match field {
                    FormField::ListingType => form.listing_type_options(),
                    FormField::RooftopId => form.rooftop_options(rooftops),
                    _ => Vec::new(),
                };
                let error = form.errors().get(field).unwrap_or_default().to_string();
                FormInput {
                    name: field.name().to_string(),
                    label: field.label().to_string(),
                    value: form.draft().get(field).to_string(),
                    placeholder: placeholder(field).to_string(),
                    input_type: if field == FormField::Year { "number" } else { "text" }
                        .to_string(),
                    is_select: matches!(field, FormField::ListingType | FormField::RooftopId),
                    options,
                    has_error: !error.is_empty(),
                    error,
                }
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "vehicle_form.html")]
pub struct VehicleFormTemplate {
    pub heading: String,
    pub action: String,
    pub cancel_href: String,
    pub save_label: String,
    pub busy: bool,
    pub inputs: Vec<FormInput>,
    pub has_submit_error: bool,
    pub submit_error: String,
}

impl VehicleFormTemplate {
    pub fn new(
        heading: &str,
        action: String,
        cancel_href: String,
        form: &VehicleForm,
        rooftops: &[Rooftop],
    ) -> Self {
        let submit_error = form.submit_error().unwrap_or_default().to_string();
        Self {
            heading: heading.to_string(),
            action,
            cancel_href,
            save_label: form.save_label().to_string(),
            busy: form.is_busy(),
            inputs: FormInput::for_form(form, rooftops),
            has_submit_error: !submit_error.is_empty(),
            submit_error,
        }
    }
}

#[derive(Template)]
#[template(path = "vehicle_delete.html")]
pub struct DeleteTemplate {
    pub vehicle: Vehicle,
    pub title: String,
    pub rooftop_name: String,
    pub has_error: bool,
    pub error: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}
