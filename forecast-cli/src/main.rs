//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive location prompts
//! - Log file setup and wiring the core workflow to the terminal

use clap::Parser;

mod cli;
mod logging;
mod prompt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
