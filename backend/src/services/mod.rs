//! Business logic services for the farm advisory server

pub mod prediction;

pub use prediction::PredictionService;
