mod cli;
mod config;
mod logging;
mod terminal;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = config::load(args.config.as_deref())?;
    logging::init(args.verbose, config.log.as_deref());
    run_cli(args, config)
}
