use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("city name must not be empty")]
    EmptyCity,

    #[error("country code '{0}' must be exactly two letters")]
    InvalidCountryCode(String),
}

/// City plus two-letter country code, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    city: String,
    country_code: String,
}

impl Location {
    pub fn new(city: &str, country_code: &str) -> Result<Self, LocationError> {
        Ok(Self {
            city: Self::validate_city(city)?.to_string(),
            country_code: Self::validate_country_code(country_code)?.to_string(),
        })
    }

    /// Returns the trimmed city, or an error if nothing is left.
    pub fn validate_city(raw: &str) -> Result<&str, LocationError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(LocationError::EmptyCity);
        }
        Ok(city)
    }

    /// Returns the trimmed code if it is exactly two alphabetic characters.
    pub fn validate_country_code(raw: &str) -> Result<&str, LocationError> {
        let code = raw.trim();
        if code.chars().count() != 2 || !code.chars().all(char::is_alphabetic) {
            return Err(LocationError::InvalidCountryCode(code.to_string()));
        }
        Ok(code)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Value of the provider's `q` parameter.
    pub fn query(&self) -> String {
        format!("{}, {}", self.city, self.country_code)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query())
    }
}

/// Parsed body of the 5-day / 3-hour forecast endpoint.
///
/// Every field is optional so that a structurally incomplete body still parses
/// and the gap can be reported as missing data instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Vec<ForecastEntry>>,
    pub city: Option<ForecastCity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastCity {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// One 3-hour slot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastEntry {
    pub dt: Option<i64>,
    pub main: Option<EntryMain>,
    pub weather: Option<Vec<EntryWeather>>,
    pub wind: Option<EntryWind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryMain {
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryWeather {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryWind {
    pub speed: Option<f64>,
}

/// Raised when a response lacks a field the table needs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MissingDataError {
    #[error("response has no forecast list")]
    NoList,

    #[error("forecast entry {index} is missing `{field}`")]
    Field { index: usize, field: &'static str },
}

/// A fully populated forecast entry, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub description: String,
    pub wind_speed: f64,
}

impl ForecastEntry {
    fn to_row(&self, index: usize) -> Result<ForecastRow, MissingDataError> {
        let missing = |field| MissingDataError::Field { index, field };

        let dt = self.dt.ok_or_else(|| missing("dt"))?;
        let time = DateTime::from_timestamp(dt, 0).ok_or_else(|| missing("dt"))?;
        let temperature = self.main.as_ref().and_then(|m| m.temp).ok_or_else(|| missing("main.temp"))?;
        let description = self
            .weather
            .as_ref()
            .and_then(|w| w.first())
            .and_then(|w| w.description.clone())
            .ok_or_else(|| missing("weather[0].description"))?;
        let wind_speed = self.wind.as_ref().and_then(|w| w.speed).ok_or_else(|| missing("wind.speed"))?;

        Ok(ForecastRow { time, temperature, description, wind_speed })
    }
}

impl ForecastResponse {
    /// Validate every entry, failing on the first gap. Order is preserved.
    pub fn rows(&self) -> Result<Vec<ForecastRow>, MissingDataError> {
        let list = self.list.as_ref().ok_or(MissingDataError::NoList)?;
        list.iter().enumerate().map(|(i, entry)| entry.to_row(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.list.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// "Name, CC" as reported by the provider, if present.
    pub fn city_label(&self) -> Option<String> {
        let city = self.city.as_ref()?;
        match (&city.name, &city.country) {
            (Some(name), Some(country)) => Some(format!("{name}, {country}")),
            (Some(name), None) => Some(name.clone()),
            _ => None,
        }
    }
}
