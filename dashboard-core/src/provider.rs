use crate::{
    config::Config,
    error::{FetchError, SearchError},
    model::{ForecastPayload, SavedLocation},
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of forecast and location-search data.
///
/// The session only talks to this trait, so tests can drive it with a
/// canned provider instead of the network.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Multi-day forecast with current conditions for a free-text query.
    async fn forecast(&self, query: &str) -> Result<ForecastPayload, FetchError>;

    /// Location candidates matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SavedLocation>, SearchError>;
}

/// Construct the WeatherAPI-backed provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(WeatherApiProvider::new(api_key, config.base_url().to_owned())))
}
