//! Location descriptors and the create payload.

#[cfg(test)]
#[path = "location_fields_test.rs"]
mod location_fields_test;

use engine::FormValues;
use engine::config::UiConfig;
use engine::detail::DetailField;
use engine::error::DescriptorError;
use engine::field::{FieldDescriptor, FieldValidation, RendererId};
use engine::selector::SelectorConfig;
use engine::table::ColumnDescriptor;
use engine::value::{RowId, lookup_path};
use serde_json::Value;

use crate::pages::franchise_fields::FRANCHISE_ROUTES;

pub const LOCATIONS: &str = "locations";
pub const LOCATION_ROUTES: &str = "/locations";
pub const ENTITY: &str = "Location";

pub const FRANCHISE_RENDERER: &str = "franchise_selector";
pub const FRANCHISE_LINK: &str = "franchise_link";

/// Franchise options fetched per selector query.
pub const FRANCHISE_OPTION_LIMIT: u32 = 5;

pub const FRANCHISE_REQUIRED: &str = "Please select a franchise.";

const FORM_KEYS: [&str; 5] = ["name", "address", "city", "postalCode", "numberOfRooms"];

/// Create form fields.
///
/// # Errors
///
/// Returns a [`DescriptorError`] if the postal code preset fails to compile.
pub fn form_fields() -> Result<Vec<FieldDescriptor>, DescriptorError> {
    const INFO: &str = "Location Information";
    Ok(vec![
        FieldDescriptor::text("name", "Location Name").required().section(INFO),
        FieldDescriptor::text("address", "Address").required().section(INFO),
        FieldDescriptor::text("city", "City").required().section(INFO),
        FieldDescriptor::text("postalCode", "Postal Code")
            .required()
            .section(INFO)
            .validation(FieldValidation::postal_code()?),
        FieldDescriptor::number("numberOfRooms", "Number of Rooms").required().section(INFO),
        FieldDescriptor::custom("franchise", "Franchise", RendererId::new(FRANCHISE_RENDERER))
            .section("Location Assignment"),
    ])
}

/// Selector over franchises, labelled by name.
pub fn franchise_selector(config: &UiConfig) -> SelectorConfig {
    SelectorConfig::new("name")
        .debounce(config.debounce_policy())
        .error_policy(config.fetch_error_policy())
}

/// Body of `POST /locations`: the form values plus the selected franchise's id.
///
/// # Errors
///
/// Returns [`FRANCHISE_REQUIRED`] when no franchise (or one without an id) is selected.
pub fn create_payload(values: &FormValues, franchise: &Value) -> Result<Value, String> {
    let franchise_id = RowId::of(franchise).ok_or_else(|| FRANCHISE_REQUIRED.to_owned())?;
    let mut payload: FormValues = FORM_KEYS
        .iter()
        .map(|key| ((*key).to_owned(), values.get(*key).cloned().unwrap_or(Value::Null)))
        .collect();
    let franchise_id = serde_json::to_value(franchise_id).map_err(|e| e.to_string())?;
    payload.insert("franchiseId".to_owned(), franchise_id);
    Ok(Value::Object(payload))
}

pub fn detail_fields() -> Vec<DetailField> {
    const GENERAL: &str = "General";
    const FRANCHISE: &str = "Franchise";
    vec![
        DetailField::scalar("name", "Location Name").section(GENERAL),
        DetailField::scalar("address", "Address").section(GENERAL),
        DetailField::scalar("city", "City").section(GENERAL),
        DetailField::scalar("postalCode", "Postal Code").section(GENERAL),
        DetailField::scalar("numberOfRooms", "Number of Rooms").section(GENERAL),
        DetailField::scalar("franchise.name", "Franchise Name").section(FRANCHISE),
        DetailField::scalar("franchise.ownerName", "Owner Name").section(FRANCHISE),
        DetailField::scalar("franchise.status", "Status").section(FRANCHISE),
        DetailField::table(
            "teachers",
            "Teachers",
            vec![
                ColumnDescriptor::new("firstName", "First Name"),
                ColumnDescriptor::new("lastName", "Last Name"),
                ColumnDescriptor::new("email", "Email"),
                ColumnDescriptor::new("employeeNumber", "Employee Number"),
            ],
        )
        .section("Teachers"),
        DetailField::custom("franchise", "Franchise Page", RendererId::new(FRANCHISE_LINK)).section(FRANCHISE),
    ]
}

/// Link to the franchise a location record belongs to.
pub fn franchise_href(record: &Value) -> Option<String> {
    let franchise = lookup_path(record, "franchise")?;
    RowId::of(franchise).map(|id| format!("{FRANCHISE_ROUTES}/view/{id}"))
}
