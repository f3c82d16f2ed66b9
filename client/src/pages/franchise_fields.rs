//! Franchise descriptors shared by the list, form and detail screens.

#[cfg(test)]
#[path = "franchise_fields_test.rs"]
mod franchise_fields_test;

use engine::FormValues;
use engine::detail::{DetailField, DetailKind, RowLink};
use engine::error::DescriptorError;
use engine::field::{FieldDescriptor, FieldValidation, RendererId, SelectOption};
use engine::table::ColumnDescriptor;
use engine::value::display_text;
use leptos::prelude::*;
use serde_json::Value;

use crate::components::render::{CellRenderer, TableColumn};
use crate::pages::location_fields::LOCATION_ROUTES;

/// REST resource name.
pub const FRANCHISES: &str = "franchises";

/// Client route prefix of the franchise screens.
pub const FRANCHISE_ROUTES: &str = "/franchises";

pub const ENTITY: &str = "Franchise";

/// Renderer of the logo field; its value lives outside the form mapping.
pub const LOGO_RENDERER: &str = "franchise_logo";
pub const LOGO_FIELD: &str = "franchiseLogo";

pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Active", "active"),
        SelectOption::new("Inactive", "inactive"),
        SelectOption::new("Interested", "interested"),
    ]
}

/// Create/edit form fields.
///
/// # Errors
///
/// Returns a [`DescriptorError`] if a validation preset fails to compile.
pub fn form_fields() -> Result<Vec<FieldDescriptor>, DescriptorError> {
    const INFO: &str = "Franchise Information";
    Ok(vec![
        FieldDescriptor::text("name", "Franchise Name").required().section(INFO),
        FieldDescriptor::text("ownerName", "Owner Name").required().section(INFO),
        FieldDescriptor::text("cardHolderName", "Card Holder Name").required().section(INFO),
        FieldDescriptor::text("iban", "IBAN").required().section(INFO).validation(FieldValidation::iban()?),
        FieldDescriptor::text("bic", "BIC").required().section(INFO),
        FieldDescriptor::select("status", "Status", status_options())
            .required()
            .section(INFO)
            .default_value("active"),
        FieldDescriptor::number("totalEmployees", "Total Employees").required().section(INFO),
        FieldDescriptor::number("percentage", "Percentage").required().section(INFO),
        FieldDescriptor::text("city", "City").required().section(INFO),
        FieldDescriptor::text("address", "Address").required().section(INFO),
        FieldDescriptor::text("postalCode", "Postal Code")
            .required()
            .section(INFO)
            .validation(FieldValidation::postal_code()?),
        FieldDescriptor::custom(LOGO_FIELD, "Franchise Logo", RendererId::new(LOGO_RENDERER))
            .section("Additional Information"),
        FieldDescriptor::email("emailAddress", "Email Address").required().section("Contact Information"),
        FieldDescriptor::tel("phoneNumber", "Phone Number").required().section("Contact Information"),
    ])
}

/// Merge the logo URL owned by its own input into the submitted values.
pub fn with_logo(mut values: FormValues, logo: &str) -> Value {
    let logo = logo.trim();
    let logo = if logo.is_empty() { Value::Null } else { Value::String(logo.to_owned()) };
    values.insert(LOGO_FIELD.to_owned(), logo);
    Value::Object(values)
}

pub fn list_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Franchise Name").sortable(),
        TableColumn::new("ownerName", "Owner Name").sortable(),
        TableColumn::new("city", "City").sortable(),
        TableColumn::new("status", "Status").render(CellRenderer::new(|value, _row| {
            let code = display_text(value);
            let label = status_label(&code);
            view! { <span class=format!("badge badge--{code}")>{label}</span> }
        })),
        TableColumn::new("totalEmployees", "Total Employees").sortable(),
        TableColumn::new("createdAt", "Created At")
            .sortable()
            .render(CellRenderer::new(|value, _row| date_part(&display_text(value)).to_owned())),
    ]
}

/// Display label of a status code; unknown codes show as-is.
pub fn status_label(code: &str) -> String {
    status_options()
        .into_iter()
        .find(|opt| display_text(&opt.value) == code)
        .map_or_else(|| code.to_owned(), |opt| opt.label)
}

/// `2024-03-01` out of an ISO timestamp; other text is returned unchanged.
pub fn date_part(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => timestamp,
    }
}

pub fn detail_fields() -> Vec<DetailField> {
    const GENERAL: &str = "General";
    const INFO: &str = "Franchise Information";
    vec![
        DetailField::scalar("name", "Franchise Name").section(GENERAL),
        DetailField::scalar("ownerName", "Owner Name").section(GENERAL),
        DetailField::scalar("cardHolderName", "Card Holder Name").section(GENERAL),
        DetailField::scalar("iban", "IBAN").section(GENERAL),
        DetailField::scalar("bic", "BIC").section(GENERAL),
        DetailField::new("status", "Status", DetailKind::Choice(status_options())).section(GENERAL),
        DetailField::scalar("totalEmployees", "Total Employees").section(GENERAL),
        DetailField::scalar("percentage", "Percentage").section(GENERAL),
        DetailField::scalar("city", "City").section(INFO),
        DetailField::scalar("address", "Address").section(INFO),
        DetailField::scalar("postalCode", "Postal Code").section(INFO),
        DetailField::scalar("emailAddress", "Email Address").section("Contact Information"),
        DetailField::scalar("phoneNumber", "Phone Number").section("Contact Information"),
        DetailField::table(
            "admins",
            "Franchise Admins",
            vec![
                ColumnDescriptor::new("firstName", "First Name"),
                ColumnDescriptor::new("lastName", "Last Name"),
                ColumnDescriptor::new("email", "Email"),
                ColumnDescriptor::new("phoneNumber", "Phone Number"),
            ],
        )
        .section("Admins"),
        DetailField::table(
            "locations",
            "Locations",
            vec![
                ColumnDescriptor::new("name", "Location Name"),
                ColumnDescriptor::new("address", "Address"),
                ColumnDescriptor::new("postalCode", "Postal Code"),
            ],
        )
        .section("Locations")
        .row_link(RowLink::new("View details", format!("{LOCATION_ROUTES}/view/{{id}}"))),
    ]
}
