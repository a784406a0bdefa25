mod args;
mod common;
mod modes;

use args::Cli;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::init();

    let cli = Cli::parse();

    // Validate inputs
    cli.command.validate()?;

    log::info!("{}", cli.command.description());

    let output = modes::run(&cli.command)?;
    println!("{}", output);

    Ok(())
}
