//! Headless CRUD rendering engine for the admin dashboard.
//!
//! Every feature screen (franchises, locations, teachers, students, ...) is
//! composed from the same four renderers: a sectioned form, a paginated table,
//! a read-only detail view, and a debounced remote selector. This crate owns
//! all of their state and behavior without touching the DOM, so it compiles
//! and tests natively. The `client` crate maps browser events onto these types
//! and renders them with Leptos.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Field descriptors, kinds, select options, validation presets |
//! | [`section`] | Ordered section grouping shared by forms and detail views |
//! | [`value`] | Dot-path lookup, display coercion, row identity |
//! | [`form`] | Form value mapping, change-time validation, submit lifecycle |
//! | [`table`] | Column descriptors, pagination, sorting, row selection, table events |
//! | [`list`] | Parent-owned list state that turns table events into fetch queries |
//! | [`debounce`] | Debounce policy and the generation-counted debounce gate |
//! | [`selector`] | Remote selector state: query, option cache, selection, sequencing |
//! | [`detail`] | Read-only detail view model with nested tables |
//! | [`config`] | UI configuration shared by every renderer |
//! | [`error`] | Typed errors |

pub mod config;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod field;
pub mod form;
pub mod list;
pub mod section;
pub mod selector;
pub mod table;
pub mod value;

/// Form value mapping: field name to current value.
pub type FormValues = serde_json::Map<String, serde_json::Value>;
