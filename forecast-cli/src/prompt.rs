use anyhow::{Context, Result};
use forecast_core::{Prompter, input::LinePrompter};
use inquire::Text;
use std::io::{self, IsTerminal};

/// Terminal prompts backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str, help: &str) -> Result<String> {
        Text::new(message)
            .with_help_message(help)
            .prompt()
            .context("Failed to read answer from terminal")
    }
}

/// `inquire` needs a TTY; piped stdin falls back to plain line reads.
pub fn for_stdin() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(InquirePrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
