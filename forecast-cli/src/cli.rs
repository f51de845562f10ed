use chrono::Local;
use clap::Parser;
use forecast_core::{
    Config, OpenWeatherClient, Presenter, collect_location, run_lookup,
};
use tracing::{debug, error, info};

use crate::{logging, prompt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Five-day, three-hourly weather forecast for a city",
    long_about = "Prompts for a city and a 2-letter country code and prints the \
                  OpenWeather 5-day forecast as a table.\n\n\
                  The API key is read from FORECAST_API_KEY."
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        logging::init(&config.log_file)?;
        info!(units = %config.units, "forecast lookup starting");

        let credential = config.credential().inspect_err(|err| {
            error!(%err, "refusing to start without an API key");
        })?;

        let mut prompter = prompt::for_stdin();
        let location = collect_location(prompter.as_mut())?;

        let client = OpenWeatherClient::new(credential, config.base_url.clone(), config.units);
        let presenter = Presenter::new(Local, config.units);
        let mut stdout = std::io::stdout();

        let outcome = run_lookup(&client, &location, &presenter, &mut stdout).await?;
        debug!(?outcome, "lookup finished");

        Ok(())
    }
}
