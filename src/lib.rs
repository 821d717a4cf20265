//! Wildlife park ticket booking API library.
//!
//! Exposes modules for integration testing and binary reuse.

pub mod models;
pub mod routes;
pub mod services;
