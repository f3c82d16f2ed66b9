//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (list state, selector state,
//! REST callbacks) and delegates rendering to the generic `components`.
//! `*_fields` modules hold the descriptors a resource's screens share.

pub mod franchise_fields;
pub mod franchise_form;
pub mod franchise_list;
pub mod franchise_view;
pub mod location_create;
pub mod location_fields;
pub mod location_view;
pub mod record;
