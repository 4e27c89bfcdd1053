//! Condition feeds for soil and weather readings
//!
//! Only mocked feeds exist for now; a sensor network or a forecast API slots
//! in behind the same traits.

pub mod soil;
pub mod weather;

pub use soil::{MockSoilSource, SoilReading, SoilSource};
pub use weather::{MockWeatherSource, WeatherReading, WeatherSource};
