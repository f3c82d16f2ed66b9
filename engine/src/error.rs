//! Engine error types.
//!
//! Messages are free text meant for people: descriptor errors for the
//! developer wiring a screen, field and form errors for the end user.

/// A field descriptor set that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// A descriptor has an empty `name`, so it cannot key the value mapping.
    #[error("field name must not be empty (label: {label})")]
    EmptyName { label: String },

    /// Two descriptors share a `name`.
    #[error("duplicate field name: {0}")]
    DuplicateName(String),

    /// A select field has no options to choose from.
    #[error("select field {0} has no options")]
    EmptyOptions(String),

    /// A validation pattern failed to compile.
    #[error("invalid validation pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A single field change that was not committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No descriptor has this name.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The field is rendered by a custom component that owns its value.
    #[error("field {0} is owned by its custom renderer")]
    CustomOwned(String),

    /// The value failed the field's validation pattern.
    #[error("{message}")]
    Rejected { field: String, message: String },
}

/// A submit attempt that did not reach the submit callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A submit is already in flight.
    #[error("a submit is already in progress")]
    Busy,

    /// Submit-time checks failed; each entry is `(field, message)`.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<(String, String)>),
}

/// UI configuration that failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`crate::config::UiConfig`].
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The configuration parsed but violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}
