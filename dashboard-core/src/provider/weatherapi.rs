use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{FetchError, SearchError},
    model::{ForecastPayload, SavedLocation},
};

use super::ForecastProvider;

/// How many forecast days to request. The dashboard renders at most three
/// but WeatherAPI bills the same either way.
const FORECAST_DAYS: u8 = 7;

/// WeatherAPI.com client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn forecast(&self, query: &str) -> Result<ForecastPayload, FetchError> {
        let url = format!("{}/forecast.json", self.base_url);
        tracing::debug!(%query, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", &FORECAST_DAYS.to_string()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status_text(status)));
        }

        let body = res.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&body)?;

        Ok(payload)
    }

    async fn search(&self, query: &str) -> Result<Vec<SavedLocation>, SearchError> {
        let url = format!("{}/search.json", self.base_url);
        tracing::debug!(%query, "searching locations");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status(status_text(status)));
        }

        let body = res.text().await?;
        let results: Vec<SavedLocation> = serde_json::from_str(&body)?;

        Ok(results)
    }
}

/// Human-readable status text, e.g. "403 Forbidden".
fn status_text(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
