//! Read-only detail view model.
//!
//! A detail screen is a list of [`DetailField`]s evaluated against one record.
//! [`build_detail`] groups them into sections (unsectioned fields last, under
//! "General") and resolves every field to a [`DetailItem`] the client can
//! render without further lookups.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use serde_json::Value;

use crate::field::{FieldDescriptor, FieldKind, RendererId, SelectOption};
use crate::section::{DEFAULT_DETAIL_SECTION, Sectioned, group_sections};
use crate::table::ColumnDescriptor;
use crate::value::{NULL, RowId, display_text, is_blank, lookup_path};

/// Shown for a missing or empty value.
pub const MISSING_VALUE: &str = "N/A";

/// Shown for a table field configured without columns.
pub const MISSING_COLUMNS: &str = "Columns not defined for this table.";

/// Shown in place of a password.
pub const MASKED_VALUE: &str = "••••••••";

/// Per-row link of a nested table; `{id}` in the template is replaced by the row id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLink {
    pub label: String,
    pub href_template: String,
}

impl RowLink {
    pub fn new(label: impl Into<String>, href_template: impl Into<String>) -> Self {
        Self { label: label.into(), href_template: href_template.into() }
    }

    /// Link for `row`, or `None` when the row has no id.
    #[must_use]
    pub fn href(&self, row: &Value) -> Option<String> {
        let id = RowId::of(row)?;
        Some(self.href_template.replace("{id}", &id.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailKind {
    Scalar,
    Password,
    /// Stored value shown through the matching option's label.
    Choice(Vec<SelectOption>),
    /// Array of strings shown as chips.
    TextList,
    /// Array of records shown as a nested read-only table.
    Table { columns: Vec<ColumnDescriptor>, row_link: Option<RowLink> },
    /// Caller view of the whole record.
    Custom(RendererId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailField {
    /// Key or dot-path into the record.
    pub name: String,
    pub label: String,
    pub section: Option<String>,
    pub kind: DetailKind,
    /// Literal value taking precedence over the record.
    pub value: Option<Value>,
}

impl DetailField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: DetailKind) -> Self {
        Self { name: name.into(), label: label.into(), section: None, kind, value: None }
    }

    pub fn scalar(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, DetailKind::Scalar)
    }

    pub fn text_list(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, DetailKind::TextList)
    }

    pub fn table(name: impl Into<String>, label: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self::new(name, label, DetailKind::Table { columns, row_link: None })
    }

    pub fn custom(name: impl Into<String>, label: impl Into<String>, renderer: RendererId) -> Self {
        Self::new(name, label, DetailKind::Custom(renderer))
    }

    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a per-row link to a table field; other kinds are left unchanged.
    #[must_use]
    pub fn row_link(mut self, link: RowLink) -> Self {
        if let DetailKind::Table { row_link, .. } = &mut self.kind {
            *row_link = Some(link);
        }
        self
    }

    fn resolve<'a>(&'a self, data: &'a Value) -> Option<&'a Value> {
        match &self.value {
            Some(value) => Some(value),
            None => lookup_path(data, &self.name),
        }
    }
}

impl From<&FieldDescriptor> for DetailField {
    fn from(field: &FieldDescriptor) -> Self {
        let kind = match &field.kind {
            FieldKind::Password => DetailKind::Password,
            FieldKind::Select(options) => DetailKind::Choice(options.clone()),
            FieldKind::Custom(renderer) => DetailKind::Custom(renderer.clone()),
            _ => DetailKind::Scalar,
        };
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            section: field.section.clone(),
            kind,
            value: None,
        }
    }
}

impl Sectioned for DetailField {
    fn section_name(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

/// One row of a nested table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    /// Stable key `"{field}-{index}"`.
    pub key: String,
    pub cells: Vec<String>,
    pub link: Option<String>,
}

/// A field resolved against the record.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailItem<'a> {
    Scalar { field: &'a DetailField, text: String },
    TextList { field: &'a DetailField, items: Vec<String> },
    Table {
        field: &'a DetailField,
        columns: &'a [ColumnDescriptor],
        rows: Vec<DetailRow>,
        link_label: Option<&'a str>,
    },
    MissingColumns { field: &'a DetailField },
    Custom { field: &'a DetailField, renderer: &'a RendererId },
}

impl<'a> DetailItem<'a> {
    #[must_use]
    pub fn field(&self) -> &'a DetailField {
        match self {
            Self::Scalar { field, .. }
            | Self::TextList { field, .. }
            | Self::Table { field, .. }
            | Self::MissingColumns { field }
            | Self::Custom { field, .. } => field,
        }
    }
}

/// One accordion of the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection<'a> {
    pub name: String,
    pub items: Vec<DetailItem<'a>>,
    pub expanded: bool,
}

/// Page heading, e.g. `"Franchise Details"`.
#[must_use]
pub fn heading(entity_name: &str) -> String {
    format!("{entity_name} Details")
}

/// Group `fields` into sections and resolve each against `data`.
#[must_use]
pub fn build_detail<'a>(fields: &'a [DetailField], data: &Value) -> Vec<DetailSection<'a>> {
    group_sections(fields, DEFAULT_DETAIL_SECTION)
        .into_iter()
        .enumerate()
        .map(|(index, section)| DetailSection {
            name: section.name,
            items: section.items.into_iter().map(|field| resolve_item(field, data)).collect(),
            expanded: index == 0,
        })
        .collect()
}

fn resolve_item<'a>(field: &'a DetailField, data: &Value) -> DetailItem<'a> {
    let value = field.resolve(data).unwrap_or(&NULL);
    match &field.kind {
        DetailKind::Scalar => DetailItem::Scalar { field, text: scalar_text(value) },
        DetailKind::Password => {
            let text = if is_blank(value) { MISSING_VALUE.to_owned() } else { MASKED_VALUE.to_owned() };
            DetailItem::Scalar { field, text }
        }
        DetailKind::Choice(options) => {
            let label = options
                .iter()
                .find(|opt| opt.value == *value || display_text(&opt.value) == display_text(value))
                .map(|opt| opt.label.clone());
            DetailItem::Scalar { field, text: label.unwrap_or_else(|| scalar_text(value)) }
        }
        DetailKind::TextList => {
            let items = match value {
                Value::Array(items) => items.iter().map(display_text).filter(|s| !s.is_empty()).collect(),
                other if !is_blank(other) => vec![display_text(other)],
                _ => Vec::new(),
            };
            DetailItem::TextList { field, items }
        }
        DetailKind::Table { columns, .. } if columns.is_empty() => DetailItem::MissingColumns { field },
        DetailKind::Table { columns, row_link } => {
            let rows = value
                .as_array()
                .map(|rows| {
                    rows.iter()
                        .enumerate()
                        .map(|(index, row)| DetailRow {
                            key: format!("{}-{index}", field.name),
                            cells: columns.iter().map(|c| c.cell_text(row)).collect(),
                            link: row_link.as_ref().and_then(|link| link.href(row)),
                        })
                        .collect()
                })
                .unwrap_or_default();
            let link_label = row_link.as_ref().map(|link| link.label.as_str());
            DetailItem::Table { field, columns, rows, link_label }
        }
        DetailKind::Custom(renderer) => DetailItem::Custom { field, renderer },
    }
}

fn scalar_text(value: &Value) -> String {
    if is_blank(value) { MISSING_VALUE.to_owned() } else { display_text(value) }
}
