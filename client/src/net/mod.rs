//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls every CRUD screen needs, `types` defines the
//! error type and wire bodies shared by those calls.

pub mod api;
pub mod types;
