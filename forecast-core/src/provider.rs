use crate::model::{ForecastResponse, Location};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Why a forecast could not be obtained.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("forecast request failed with status {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        /// Raw (truncated) response body, kept for the log.
        body: String,
    },

    /// DNS, connect, timeout, or body read failure.
    #[error("could not reach the forecast service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("forecast response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Response body, for the failure kinds that received one.
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// One request for the multi-day forecast at `location`.
    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastResponse, FetchError>;
}
