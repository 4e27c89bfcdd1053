//! Farm Advisory Platform - Backend Server
//!
//! Serves yield estimates, rule-based advisories and the current (mocked)
//! soil and weather readings to the farm dashboard.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::{MockSoilSource, MockWeatherSource, SoilSource, WeatherSource};
use services::PredictionService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_source: Arc<dyn WeatherSource>,
    pub soil_source: Arc<dyn SoilSource>,
}

impl AppState {
    /// Build state with the mocked feeds described by the configuration
    pub fn new(config: Config) -> Self {
        let weather_source = Arc::new(MockWeatherSource::from_config(&config.mock.weather));
        let soil_source = Arc::new(MockSoilSource::from_config(&config.mock.soil));
        Self {
            config: Arc::new(config),
            weather_source,
            soil_source,
        }
    }

    pub fn prediction_service(&self) -> PredictionService {
        PredictionService::new(self.weather_source.clone(), self.soil_source.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Farm Advisory Server");
    tracing::info!("Environment: {}", config.environment);
    if config.mock.latency_ms > 0 {
        tracing::info!("Simulating {}ms latency on condition feeds", config.mock.latency_ms);
    }

    let addr = config.bind_address();

    // Create application state
    let state = AppState::new(config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Advisory Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
