use chrono::TimeZone;
use std::{fmt::Display, io::Write};
use tracing::{debug, error, info, warn};

use crate::{
    model::Location,
    presenter::{Presenter, RenderResult},
    provider::ForecastProvider,
};

pub const FETCH_FAILED_MESSAGE: &str = "Sorry, could not get weather";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Rendered(usize),
    NoData,
    FetchFailed,
}

/// Fetch the forecast for `location` and print it. Fetch and data failures end
/// here as a user-facing line; only writes to `out` can fail.
pub async fn run_lookup<P, Tz, W>(
    provider: &P,
    location: &Location,
    presenter: &Presenter<Tz>,
    out: &mut W,
) -> std::io::Result<LookupOutcome>
where
    P: ForecastProvider + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
    W: Write,
{
    let response = match provider.fetch_forecast(location).await {
        Ok(response) => response,
        Err(err) => {
            error!(%location, %err, "could not fetch forecast");
            if let Some(body) = err.body() {
                debug!(%body, "failing response body");
            }
            writeln!(out, "{FETCH_FAILED_MESSAGE}")?;
            return Ok(LookupOutcome::FetchFailed);
        }
    };

    match presenter.render(&response, out)? {
        RenderResult::Rendered(rows) => {
            info!(%location, rows, "forecast rendered");
            Ok(LookupOutcome::Rendered(rows))
        }
        RenderResult::Unknown(err) => {
            warn!(%location, %err, "forecast response had no usable data");
            Ok(LookupOutcome::NoData)
        }
    }
}
