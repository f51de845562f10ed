use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::{Credential, Units},
    model::{ForecastResponse, Location},
};

use super::{FetchError, ForecastProvider};

/// Client for OpenWeather's 5-day / 3-hour forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    credential: Credential,
    base_url: String,
    units: Units,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(credential: Credential, base_url: impl Into<String>, units: Units) -> Self {
        Self {
            credential,
            base_url: base_url.into(),
            units,
            http: Client::new(),
        }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }
}

/// Error body returned by OpenWeather alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastResponse, FetchError> {
        let q = location.query();
        debug!(location = %q, units = %self.units, "requesting 5-day forecast");

        let res = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("q", q.as_str()),
                ("units", self.units.as_str()),
                ("appid", self.credential.expose()),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<OwErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| truncate_body(&body));

            return Err(FetchError::Status { status, message, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        debug!(entries = parsed.len(), city = ?parsed.city_label(), "forecast received");

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
