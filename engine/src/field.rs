//! Field descriptors: declarative description of one form field.
//!
//! DESIGN
//! ======
//! Kind-specific data lives inside the [`FieldKind`] variant: select options
//! in `Select`, the renderer handle in `Custom`. A custom field without a
//! renderer is therefore unrepresentable, and [`validate_descriptors`] checks
//! the remaining invariants (non-empty unique names, non-empty options).

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::DescriptorError;
use crate::value::display_text;

/// One choice of a select field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Name of a caller-supplied renderer for a custom field.
///
/// The engine never looks inside it; the client maps it to a view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RendererId(pub String);

impl RendererId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Input kind of a field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    Number,
    Tel,
    Select(Vec<SelectOption>),
    Custom(RendererId),
}

impl FieldKind {
    /// HTML `type` attribute for kinds rendered as a plain `<input>`.
    #[must_use]
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Text | Self::Select(_) | Self::Custom(_) => "text",
        }
    }

    /// Value a field of this kind holds when nothing has been entered.
    #[must_use]
    pub fn empty_value(&self) -> Value {
        match self {
            Self::Number => json!(0),
            _ => json!(""),
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Options of a select field; empty for every other kind.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Select(options) => options,
            _ => &[],
        }
    }
}

/// A value pattern checked at the moment a field changes.
#[derive(Clone, Debug)]
pub struct FieldValidation {
    pattern: Regex,
    message: String,
}

impl FieldValidation {
    /// Compile `pattern` into a validation rule.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidPattern`] if the regex does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, DescriptorError> {
        let pattern = Regex::new(pattern).map_err(|e| DescriptorError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern, message: message.into() })
    }

    /// Five-digit postal code; partial entry (fewer digits) is allowed.
    ///
    /// # Errors
    ///
    /// Only if the built-in pattern fails to compile.
    pub fn postal_code() -> Result<Self, DescriptorError> {
        Self::new(r"^\d{0,5}$", "Postal code must be a 5-digit number")
    }

    /// German IBAN: `DE` followed by up to 20 digits, optionally grouped by spaces.
    ///
    /// # Errors
    ///
    /// Only if the built-in pattern fails to compile.
    pub fn iban() -> Result<Self, DescriptorError> {
        Self::new(r"^(D|DE( ?\d){0,20})?$", "IBAN must start with \"DE\" followed by up to 20 digits")
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check a value. Non-string values are validated through their display text.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.pattern.is_match(s),
            other => self.pattern.is_match(&display_text(other)),
        }
    }
}

/// Declarative description of one form field.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub section: Option<String>,
    pub validation: Option<FieldValidation>,
    pub default_value: Option<Value>,
    pub disabled: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            section: None,
            validation: None,
            default_value: None,
            disabled: false,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub fn select(name: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn custom(name: impl Into<String>, label: impl Into<String>, renderer: RendererId) -> Self {
        Self::new(name, label, FieldKind::Custom(renderer))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Value the field starts with when no initial data supplies one.
    #[must_use]
    pub fn initial_value(&self) -> Value {
        self.default_value.clone().unwrap_or_else(|| self.kind.empty_value())
    }

    /// Label of the select option holding `value`, if any.
    #[must_use]
    pub fn option_label(&self, value: &Value) -> Option<&str> {
        self.kind
            .options()
            .iter()
            .find(|opt| opt.value == *value || display_text(&opt.value) == display_text(value))
            .map(|opt| opt.label.as_str())
    }
}

/// Check a descriptor list before building a form from it.
///
/// # Errors
///
/// Returns the first violated invariant: an empty name, a duplicate name, or a
/// select field without options.
pub fn validate_descriptors(fields: &[FieldDescriptor]) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName { label: field.label.clone() });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(DescriptorError::DuplicateName(field.name.clone()));
        }
        if let FieldKind::Select(options) = &field.kind
            && options.is_empty()
        {
            return Err(DescriptorError::EmptyOptions(field.name.clone()));
        }
    }
    Ok(())
}
