//! Helpers over opaque JSON rows and records.
//!
//! Rows arrive from the REST backend as untyped JSON objects. Renderers only
//! need three things from them: look a value up by dot-path, turn it into
//! display text, and decide whether two items are the same entity.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity key used when comparing items unless a screen overrides it.
pub const DEFAULT_IDENTITY_KEY: &str = "id";

/// Shared `null` for lookups that fall back to an absent value.
pub static NULL: Value = Value::Null;

/// Resolve a dot-separated path (`"franchise.name"`) inside `value`.
///
/// Numeric segments index into arrays. An empty path resolves to `value`.
#[must_use]
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().map_or(None, |idx| items.get(idx)),
        _ => None,
    })
}

/// Coerce a JSON value to the text a table cell or label shows.
///
/// `null` becomes empty text, strings are shown unquoted, arrays of scalars
/// are joined with `", "`, and objects fall back to compact JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Display text at `path`, or empty text when the path is absent.
#[must_use]
pub fn display_at(value: &Value, path: &str) -> String {
    lookup_path(value, path).map(display_text).unwrap_or_default()
}

/// True when a value counts as "not filled in" for required checks and
/// "N/A" rendering.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Whether two items denote the same entity.
///
/// Objects compare by their `key` field when both carry it; anything else
/// (primitives, objects without the key) compares by exact value.
#[must_use]
pub fn same_identity(a: &Value, b: &Value, key: &str) -> bool {
    match (a.get(key), b.get(key)) {
        (Some(left), Some(right)) if a.is_object() && b.is_object() => left == right,
        _ => a == b,
    }
}

/// Stable row identifier extracted from a row's `id` field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl RowId {
    /// Read the identity of `row` from its `id` field.
    #[must_use]
    pub fn of(row: &Value) -> Option<Self> {
        Self::from_value(row.get(DEFAULT_IDENTITY_KEY)?)
    }

    /// Interpret a scalar JSON value as an id.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Parse a route parameter: numeric text becomes [`RowId::Int`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(raw.parse::<i64>().map_or_else(|_| Self::Text(raw.to_owned()), Self::Int))
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
