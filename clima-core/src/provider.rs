use crate::{
    Config,
    config::API_KEY_ENV,
    error::FetchError,
    model::{Coordinate, Snapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather for a coordinate.
///
/// One fetch per call, no retries and no caching; recovery is the
/// caller's concern.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, coordinate: Coordinate) -> Result<Snapshot, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    provider_from_key(config.resolved_api_key())
}

fn provider_from_key(api_key: Option<String>) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `clima configure` or set the {API_KEY_ENV} environment variable."
        )
    })?;

    Ok(OpenWeatherProvider::new(api_key))
}
