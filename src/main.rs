mod constants;
mod error;
mod http;
mod input;
mod logging;
mod output;
mod processor;
mod types;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use crate::processor::RunOutcome;
use crate::types::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let mut stdout = io::stdout();
    match processor::run(&cli, &mut stdout).await? {
        RunOutcome::Completed => Ok(ExitCode::SUCCESS),
        RunOutcome::NoUrls => Ok(ExitCode::FAILURE),
    }
}
