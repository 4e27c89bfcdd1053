//! HTTP handlers for the farm advisory server

pub mod conditions;
pub mod crops;
pub mod health;
pub mod prediction;

pub use conditions::{get_soil, get_weather};
pub use crops::list_crops;
pub use health::health_check;
pub use prediction::{assess, predict, recommend};
