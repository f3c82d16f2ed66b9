//! Reusable UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The four generic renderers (`dynamic_form`, `dynamic_table`,
//! `dynamic_detail`, `remote_selector`) plus the small pieces they compose
//! (`search_bar`, `confirm_dialog`, `snackbar`). `render` holds the
//! caller-supplied view and callback types the renderers accept.

pub mod confirm_dialog;
pub mod dynamic_detail;
pub mod dynamic_form;
pub mod dynamic_table;
pub mod remote_selector;
pub mod render;
pub mod search_bar;
pub mod snackbar;
