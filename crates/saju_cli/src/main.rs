mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::SajuConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = SajuConfig::load(cli.config.as_deref())?;
    let json = cli.json;
    match cli.command {
        Command::Pillars(args) => {
            debug!("command: pillars");
            commands::pillars(&config, &args, json)
        }
        Command::Analyze(args) => {
            debug!("command: analyze");
            commands::analyze(&config, &args, json)
        }
        Command::Lunar { date } => commands::lunar(&config, &date, json),
        Command::Solar {
            year,
            month,
            day,
            leap,
        } => commands::solar(&config, year, month, day, leap, json),
        Command::Terms { year, offset } => commands::terms(year, offset, json),
        Command::Presets => commands::presets(&config, json),
    }
}
