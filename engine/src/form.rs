//! Dynamic form state: value mapping, change-time validation, submit lifecycle.
//!
//! DESIGN
//! ======
//! The value mapping holds one entry per descriptor. It is built from the
//! caller's initial data (falling back to each field's default, then to the
//! kind's empty value) and re-synced whenever the caller hands in new initial
//! data. Custom fields keep a slot in the mapping but the generic change
//! handler refuses to write it: their component owns the value.
//!
//! Submit is split in two halves around the caller's async callback:
//! [`FormState::begin_submit`] snapshots the values and marks the form busy,
//! [`FormState::finish_submit`] applies the outcome (reset after a successful
//! add, keep after an edit, keep after a failure).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FormValues;
use crate::error::{DescriptorError, FieldError, FormError};
use crate::field::{FieldDescriptor, FieldKind, validate_descriptors};
use crate::section::{DEFAULT_FORM_SECTION, Section, group_sections};
use crate::value::{NULL, display_text, is_blank};

/// Whether the form creates a new entity or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Edit => "Edit",
        }
    }

    /// Heading and submit-button text, e.g. `"Add Franchise"`.
    #[must_use]
    pub fn heading(self, entity_name: &str) -> String {
        format!("{} {entity_name}", self.label())
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Success body of a submit callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: String,
}

/// Message shown when a required field is left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown when an email field does not look like an address.
pub const EMAIL_MESSAGE: &str = "Enter a valid email address";

/// All state behind one rendered form.
#[derive(Clone, Debug)]
pub struct FormState {
    fields: Vec<FieldDescriptor>,
    mode: FormMode,
    values: FormValues,
    errors: BTreeMap<String, String>,
    submitting: bool,
    version: u64,
}

impl FormState {
    /// Build a form whose values start at each field's default.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if the descriptor set is malformed.
    pub fn new(fields: Vec<FieldDescriptor>, mode: FormMode) -> Result<Self, DescriptorError> {
        Self::with_initial(fields, mode, &FormValues::new())
    }

    /// Build a form whose values start from `initial` (e.g. a loaded record).
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if the descriptor set is malformed.
    pub fn with_initial(
        fields: Vec<FieldDescriptor>,
        mode: FormMode,
        initial: &FormValues,
    ) -> Result<Self, DescriptorError> {
        validate_descriptors(&fields)?;
        let values = initial_values(&fields, initial);
        Ok(Self { fields, mode, values, errors: BTreeMap::new(), submitting: false, version: 0 })
    }

    /// Replace the value mapping from new initial data.
    ///
    /// Keys of `initial` that name no field are ignored; fields missing from
    /// `initial` fall back to their default. Inline errors are cleared.
    pub fn sync_initial(&mut self, initial: &FormValues) {
        self.values = initial_values(&self.fields, initial);
        self.errors.clear();
        self.bump();
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Current value as input text (`""` for absent values).
    #[must_use]
    pub fn value_text(&self, name: &str) -> String {
        self.values.get(name).map(display_text).unwrap_or_default()
    }

    /// Inline error for a field, if its last change or submit check failed.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Fields grouped by section, unsectioned fields last under "Other".
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_, FieldDescriptor>> {
        group_sections(&self.fields, DEFAULT_FORM_SECTION)
    }

    /// Write a value programmatically, running the field's pattern check.
    ///
    /// Custom fields are accepted here so their component can mirror its
    /// value into the mapping when it wants to.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnknownField`] for an unknown name, [`FieldError::Rejected`]
    /// when the pattern check fails (the old value is kept and the message is
    /// recorded as the field's inline error).
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError> {
        let field = self.field(name).ok_or_else(|| FieldError::UnknownField(name.to_owned()))?;
        if let Some(rule) = &field.validation
            && !rule.accepts(&value)
        {
            let message = rule.message().to_owned();
            self.errors.insert(name.to_owned(), message.clone());
            self.bump();
            return Err(FieldError::Rejected { field: name.to_owned(), message });
        }
        self.errors.remove(name);
        self.values.insert(name.to_owned(), value);
        self.bump();
        Ok(())
    }

    /// Generic change handler for raw input text from a rendered control.
    ///
    /// Number inputs store numbers when the text parses, select inputs store
    /// the matching option's value.
    ///
    /// # Errors
    ///
    /// [`FieldError::CustomOwned`] for custom fields, otherwise as
    /// [`FormState::set_field`].
    pub fn handle_input(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        let field = self.field(name).ok_or_else(|| FieldError::UnknownField(name.to_owned()))?;
        if field.kind.is_custom() {
            return Err(FieldError::CustomOwned(name.to_owned()));
        }
        let value = parse_input(&field.kind, raw);
        self.set_field(name, value)
    }

    /// Start a submit: run submit-time checks and snapshot the values.
    ///
    /// # Errors
    ///
    /// [`FormError::Busy`] while a previous submit is in flight;
    /// [`FormError::Invalid`] when required or email checks fail (those
    /// messages become inline errors).
    pub fn begin_submit(&mut self) -> Result<FormValues, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        let failures = self.submit_failures();
        if !failures.is_empty() {
            for (name, message) in &failures {
                self.errors.insert(name.clone(), message.clone());
            }
            self.bump();
            return Err(FormError::Invalid(failures));
        }
        self.submitting = true;
        self.bump();
        Ok(self.values.clone())
    }

    /// Apply the outcome of the submit callback.
    ///
    /// A successful add resets every non-custom field to its kind's empty
    /// value; a successful edit and any failure keep the values as they are.
    pub fn finish_submit<T, E>(&mut self, outcome: &Result<T, E>) {
        self.submitting = false;
        if outcome.is_ok() && self.mode == FormMode::Add {
            self.reset_to_empty();
        }
        self.bump();
    }

    /// Reset every non-custom field to `0` (numbers) or `""` (everything else).
    pub fn reset_to_empty(&mut self) {
        for field in &self.fields {
            if field.kind.is_custom() {
                continue;
            }
            self.values.insert(field.name.clone(), field.kind.empty_value());
        }
        self.errors.clear();
        self.bump();
    }

    fn submit_failures(&self) -> Vec<(String, String)> {
        let mut failures = Vec::new();
        for field in &self.fields {
            if field.kind.is_custom() || field.disabled {
                continue;
            }
            let value = self.values.get(&field.name).unwrap_or(&NULL);
            if field.required && is_blank(value) {
                failures.push((field.name.clone(), REQUIRED_MESSAGE.to_owned()));
                continue;
            }
            if field.kind == FieldKind::Email && !is_blank(value) && !looks_like_email(&display_text(value)) {
                failures.push((field.name.clone(), EMAIL_MESSAGE.to_owned()));
            }
        }
        failures
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

fn initial_values(fields: &[FieldDescriptor], initial: &FormValues) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let value = initial.get(&field.name).cloned().unwrap_or_else(|| field.initial_value());
            (field.name.clone(), value)
        })
        .collect()
}

fn parse_input(kind: &FieldKind, raw: &str) -> Value {
    match kind {
        FieldKind::Number => {
            let trimmed = raw.trim();
            if let Ok(int) = trimmed.parse::<i64>() {
                Value::from(int)
            } else if let Some(num) = trimmed.parse::<f64>().map_or(None, serde_json::Number::from_f64) {
                Value::Number(num)
            } else {
                Value::String(raw.to_owned())
            }
        }
        FieldKind::Select(options) => options
            .iter()
            .find(|opt| display_text(&opt.value) == raw)
            .map_or_else(|| Value::String(raw.to_owned()), |opt| opt.value.clone()),
        _ => Value::String(raw.to_owned()),
    }
}

/// Loose address check matching what an `<input type="email">` enforces.
#[must_use]
pub fn looks_like_email(text: &str) -> bool {
    let text = text.trim();
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.chars().any(char::is_whitespace)
}
