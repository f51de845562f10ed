//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Location input collection behind a prompt abstraction
//! - The OpenWeather 5-day forecast client
//! - Table rendering and the lookup workflow tying them together
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod input;
pub mod lookup;
pub mod model;
pub mod presenter;
pub mod provider;

pub use config::{Config, ConfigError, Credential, Units};
pub use input::{LinePrompter, Prompter, collect_location};
pub use lookup::{LookupOutcome, run_lookup};
pub use model::{ForecastResponse, ForecastRow, Location, LocationError, MissingDataError};
pub use presenter::{Presenter, RenderResult};
pub use provider::{FetchError, ForecastProvider, OpenWeatherClient};
