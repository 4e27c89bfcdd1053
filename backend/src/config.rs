//! Configuration management for the farm advisory server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{SoilSample, WeatherSnapshot};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Mocked condition feeds
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    /// Artificial delay for the weather and soil endpoints, in milliseconds
    pub latency_ms: u64,

    pub weather: MockWeatherConfig,

    pub soil: MockSoilConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockWeatherConfig {
    pub temperature_celsius: f64,
    pub rain_next_7_days_mm: f64,
    pub condition: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockSoilConfig {
    pub ph: f64,
    pub organic_matter_percent: f64,
    pub moisture_percent: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let weather = WeatherSnapshot::placeholder();
        let soil = SoilSample::placeholder();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("mock.latency_ms", 0)?
            .set_default("mock.weather.temperature_celsius", weather.temperature_celsius)?
            .set_default("mock.weather.rain_next_7_days_mm", weather.rain_next_7_days_mm)?
            .set_default("mock.weather.condition", weather.condition)?
            .set_default("mock.soil.ph", soil.ph)?
            .set_default("mock.soil.organic_matter_percent", soil.organic_matter_percent)?
            .set_default("mock.soil.moisture_percent", soil.moisture_percent)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Address to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            mock: MockConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            weather: MockWeatherConfig::from(WeatherSnapshot::placeholder()),
            soil: MockSoilConfig::from(SoilSample::placeholder()),
        }
    }
}

impl From<WeatherSnapshot> for MockWeatherConfig {
    fn from(snapshot: WeatherSnapshot) -> Self {
        Self {
            temperature_celsius: snapshot.temperature_celsius,
            rain_next_7_days_mm: snapshot.rain_next_7_days_mm,
            condition: snapshot.condition,
        }
    }
}

impl From<&MockWeatherConfig> for WeatherSnapshot {
    fn from(config: &MockWeatherConfig) -> Self {
        WeatherSnapshot::new(
            config.temperature_celsius,
            config.rain_next_7_days_mm,
            config.condition.clone(),
        )
    }
}

impl From<SoilSample> for MockSoilConfig {
    fn from(sample: SoilSample) -> Self {
        Self {
            ph: sample.ph,
            organic_matter_percent: sample.organic_matter_percent,
            moisture_percent: sample.moisture_percent,
        }
    }
}

impl From<&MockSoilConfig> for SoilSample {
    fn from(config: &MockSoilConfig) -> Self {
        SoilSample::new(config.ph, config.organic_matter_percent, config.moisture_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mock_readings() {
        let config = Config::default();
        assert_eq!(WeatherSnapshot::from(&config.mock.weather), WeatherSnapshot::placeholder());
        assert_eq!(SoilSample::from(&config.mock.soil), SoilSample::placeholder());
        assert_eq!(config.mock.latency_ms, 0);
    }

    #[test]
    fn test_bind_address() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }
}
