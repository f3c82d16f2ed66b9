//! Table model: columns, pagination, sorting, row selection, events.
//!
//! DESIGN
//! ======
//! The table is a pure view over parent-owned data. Nothing here fetches:
//! user interaction is described as a [`TableEvent`] and handed back to the
//! owner (usually a [`crate::list::ListState`]). The only state the table
//! keeps for itself is the client-side sort of the visible page and the row
//! checkbox selection, both of which reset when a new page arrives.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{RowId, display_at, lookup_path};

/// Rows-per-page choices offered by the pagination footer.
pub const LIMIT_OPTIONS: [u32; 3] = [5, 10, 25];

/// Text shown in place of rows when the page is empty.
pub const EMPTY_TEXT: &str = "No rows";

/// One table column keyed by a dot-path into each row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub field: String,
    pub header_name: String,
    #[serde(default)]
    pub sortable: bool,
}

impl ColumnDescriptor {
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self { field: field.into(), header_name: header_name.into(), sortable: false }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Raw cell value, or `None` when the path is absent.
    #[must_use]
    pub fn cell<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        lookup_path(row, &self.field)
    }

    /// Cell value coerced to text; absent values are empty.
    #[must_use]
    pub fn cell_text(&self, row: &Value) -> String {
        display_at(row, &self.field)
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Zero-based server pagination as seen by the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_count: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 0, limit: 10, total_count: 0 }
    }
}

impl Pagination {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self { limit: limit.max(1), ..Self::default() }
    }

    /// Number of pages needed for `total_count` rows (at least one).
    #[must_use]
    pub fn page_count(&self) -> u64 {
        let limit = u64::from(self.limit.max(1));
        self.total_count.div_ceil(limit).max(1)
    }

    /// Index of the first row of the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }

    /// Pages past the end are legal; they simply render empty.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.offset() >= self.total_count && self.page > 0
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.page_count()
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// A new limit always starts over at the first page.
    #[must_use]
    pub fn with_limit(self, limit: u32) -> Self {
        Self { page: 0, limit: limit.max(1), ..self }
    }

    #[must_use]
    pub fn with_total(self, total_count: u64) -> Self {
        Self { total_count, ..self }
    }

    /// Footer label, e.g. `"26–50 of 57"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total_count == 0 || self.is_out_of_range() {
            return format!("0–0 of {}", self.total_count);
        }
        let first = self.offset() + 1;
        let last = (self.offset() + u64::from(self.limit)).min(self.total_count);
        format!("{first}–{last} of {}", self.total_count)
    }
}

// =============================================================================
// ACTIONS AND EVENTS
// =============================================================================

/// Which row actions the owner handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowActions {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
    pub show_default: bool,
}

impl Default for RowActions {
    fn default() -> Self {
        Self { view: false, edit: false, delete: false, show_default: true }
    }
}

impl RowActions {
    #[must_use]
    pub fn all() -> Self {
        Self { view: true, edit: true, delete: true, show_default: true }
    }

    /// Whether the trailing actions column is rendered at all.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.show_default && (self.view || self.edit || self.delete)
    }
}

/// Something the user did that the table's owner must handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    PageChange(u32),
    LimitChange(u32),
    SearchChange(String),
    View(RowId),
    Edit(RowId),
    Delete(Vec<RowId>),
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Client-side sort of the visible page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_owned());
            self.direction = SortDirection::Asc;
        }
    }

    #[must_use]
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        (self.field.as_deref() == Some(field)).then_some(self.direction)
    }

    /// Stable-sort `rows` in place. Rows without the field sort first ascending.
    pub fn apply(&self, rows: &mut [Value]) {
        let Some(field) = &self.field else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = compare_cells(lookup_path(a, field), lookup_path(b, field));
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => type_rank(x).cmp(&type_rank(y)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

// =============================================================================
// ROW SELECTION
// =============================================================================

/// Checked rows of the visible page, in the order they were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSelection {
    order: Vec<RowId>,
}

impl RowSelection {
    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.order.contains(id)
    }

    pub fn toggle(&mut self, id: &RowId) {
        if self.is_selected(id) {
            self.order.retain(|existing| existing != id);
        } else {
            self.order.push(id.clone());
        }
    }

    /// Header checkbox: select every row of the page, or clear when all are selected.
    pub fn toggle_all(&mut self, rows: &[Value]) {
        if self.all_selected(rows) {
            self.clear();
            return;
        }
        for id in rows.iter().filter_map(RowId::of) {
            if !self.is_selected(&id) {
                self.order.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Drop ids no longer present in `rows`. Returns `true` if anything was dropped.
    pub fn retain_rows(&mut self, rows: &[Value]) -> bool {
        let before = self.order.len();
        let present: Vec<RowId> = rows.iter().filter_map(RowId::of).collect();
        self.order.retain(|id| present.contains(id));
        self.order.len() != before
    }

    /// True when the page has rows and every one of them is selected.
    #[must_use]
    pub fn all_selected(&self, rows: &[Value]) -> bool {
        let mut ids = rows.iter().filter_map(RowId::of).peekable();
        ids.peek().is_some() && ids.all(|id| self.is_selected(&id))
    }

    /// Some but not all rows are selected (header checkbox shows a dash).
    #[must_use]
    pub fn is_partial(&self, rows: &[Value]) -> bool {
        !self.is_empty() && !self.all_selected(rows)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Selected ids in the order they were checked.
    #[must_use]
    pub fn ids(&self) -> &[RowId] {
        &self.order
    }

    /// Bulk delete request for the current selection, if any.
    #[must_use]
    pub fn delete_event(&self) -> Option<TableEvent> {
        (!self.is_empty()).then(|| TableEvent::Delete(self.order.clone()))
    }
}

// =============================================================================
// BODY
// =============================================================================

/// What the table body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Rows,
}

impl TableBody {
    #[must_use]
    pub fn of(loading: bool, rows: &[Value]) -> Self {
        if loading {
            Self::Loading
        } else if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows
        }
    }
}
