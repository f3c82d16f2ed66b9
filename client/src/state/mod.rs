//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Screen-local state lives in the `engine` types owned by each page; only
//! cross-screen concerns such as notifications are provided via context.

pub mod notify;
