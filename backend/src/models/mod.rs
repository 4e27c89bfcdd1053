//! Models for the farm advisory server
//!
//! Re-exports the core records from the shared crate

pub use shared::models::*;
