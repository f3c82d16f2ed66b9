//! Caller-supplied views and async callbacks plugged into the generic renderers.
//!
//! DESIGN
//! ======
//! The engine only names custom renderers (`RendererId`); the views behind
//! those names are registered here by the feature screen. Cell renderers are
//! attached to columns directly since they take the cell value and the row.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use engine::field::RendererId;
use engine::form::SubmitResponse;
use engine::table::ColumnDescriptor;
use leptos::prelude::*;
use serde_json::Value;

/// Pending outcome of a form submit callback.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<SubmitResponse, String>>>>;

/// Pending outcome of a selector options fetch.
pub type OptionsFuture = Pin<Box<dyn Future<Output = Result<Vec<Value>, String>>>>;

/// Views for the custom fields of a form, keyed by renderer id.
#[derive(Clone, Default)]
pub struct FieldRenderers(HashMap<RendererId, ViewFn>);

impl FieldRenderers {
    #[must_use]
    pub fn with(mut self, id: RendererId, view: impl Into<ViewFn>) -> Self {
        self.0.insert(id, view.into());
        self
    }

    pub fn get(&self, id: &RendererId) -> Option<&ViewFn> {
        self.0.get(id)
    }
}

/// A view of a whole record, used by custom detail fields.
#[derive(Clone)]
pub struct RecordView(Arc<dyn Fn(&Value) -> AnyView + Send + Sync>);

impl RecordView {
    pub fn new<V: IntoView + 'static>(f: impl Fn(&Value) -> V + Send + Sync + 'static) -> Self {
        Self(Arc::new(move |record| f(record).into_any()))
    }

    pub fn run(&self, record: &Value) -> AnyView {
        (self.0)(record)
    }
}

/// Record views of a detail screen, keyed by renderer id.
#[derive(Clone, Default)]
pub struct RecordRenderers(HashMap<RendererId, RecordView>);

impl RecordRenderers {
    #[must_use]
    pub fn with(mut self, id: RendererId, view: RecordView) -> Self {
        self.0.insert(id, view);
        self
    }

    pub fn get(&self, id: &RendererId) -> Option<&RecordView> {
        self.0.get(id)
    }
}

/// Rich cell content computed from `(value, row)`.
#[derive(Clone)]
pub struct CellRenderer(Arc<dyn Fn(&Value, &Value) -> AnyView + Send + Sync>);

impl CellRenderer {
    pub fn new<V: IntoView + 'static>(f: impl Fn(&Value, &Value) -> V + Send + Sync + 'static) -> Self {
        Self(Arc::new(move |value, row| f(value, row).into_any()))
    }

    pub fn run(&self, value: &Value, row: &Value) -> AnyView {
        (self.0)(value, row)
    }
}

/// A table column: the engine descriptor plus an optional cell renderer.
#[derive(Clone)]
pub struct TableColumn {
    pub descriptor: ColumnDescriptor,
    pub render: Option<CellRenderer>,
}

impl TableColumn {
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        ColumnDescriptor::new(field, header_name).into()
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.descriptor = self.descriptor.sortable();
        self
    }

    #[must_use]
    pub fn render(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }
}

impl From<ColumnDescriptor> for TableColumn {
    fn from(descriptor: ColumnDescriptor) -> Self {
        Self { descriptor, render: None }
    }
}
