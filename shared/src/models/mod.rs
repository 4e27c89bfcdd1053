//! Domain models for the farm advisory platform

mod advisory;
mod crop;
mod estimate;
mod farm;
mod soil;
mod weather;

pub use advisory::*;
pub use crop::*;
pub use estimate::*;
pub use farm::*;
pub use soil::*;
pub use weather::*;
