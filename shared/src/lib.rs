//! Shared types and scoring logic for the farm advisory platform
//!
//! This crate holds the pure core used by the backend service and the
//! browser dashboard (via WASM): the farm input records, the yield
//! estimator, the advisory rules, and the input validation policy.

pub mod estimator;
pub mod models;
pub mod rules;
pub mod types;
pub mod validation;

pub use estimator::*;
pub use models::*;
pub use rules::*;
pub use types::*;
pub use validation::*;
