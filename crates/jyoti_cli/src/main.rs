mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::AppContext;
use crate::config::CliConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config, cli.json)?;

    match cli.command {
        Command::Rashi { lon } => commands::rashi(&ctx, lon),
        Command::Nakshatra { lon } => commands::nakshatra(&ctx, lon),
        Command::Dms { deg } => commands::dms(&ctx, deg),
        Command::Balance(args) => commands::balance(&ctx, &args),
        Command::Dasha(args) => commands::dasha(&ctx, &args),
        Command::Current(args) => commands::current(&ctx, &args),
    }
}
