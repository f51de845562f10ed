use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::model::Location;

pub const CITY_PROMPT: &str = "Enter the name of the city:";
pub const CITY_HELP: &str = "e.g. minneapolis";
pub const COUNTRY_PROMPT: &str = "Enter the 2-letter country code:";
pub const COUNTRY_HELP: &str = "e.g. us, gb, de";

/// Source of interactive answers.
pub trait Prompter {
    /// Ask one question and return the raw answer. Errors mean the input is gone.
    fn ask(&mut self, message: &str, help: &str) -> Result<String>;
}

/// Plain line-based prompts, for when stdin is not a terminal.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str, _help: &str) -> Result<String> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read answer from input")?;
        if read == 0 {
            bail!("Input closed before a location was entered");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompt until a non-blank city and a valid two-letter country code are supplied.
pub fn collect_location<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Location> {
    let city = loop {
        let answer = prompter.ask(CITY_PROMPT, CITY_HELP)?;
        match Location::validate_city(&answer) {
            Ok(city) => break city.to_string(),
            Err(err) => debug!(%err, "rejected city input"),
        }
    };

    let country = loop {
        let answer = prompter.ask(COUNTRY_PROMPT, COUNTRY_HELP)?;
        match Location::validate_country_code(&answer) {
            Ok(code) => break code.to_string(),
            Err(err) => debug!(%err, "rejected country code input"),
        }
    };

    Ok(Location::new(&city, &country)?)
}
