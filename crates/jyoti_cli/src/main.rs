mod chart_cmd;
mod cli;
mod config;
mod dasha_cmd;
mod logging;
mod lookup_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::JyotiConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = JyotiConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Chart(args) => chart_cmd::run(args, &config, cli.json),
        Command::Dasha(args) => dasha_cmd::run(args, &config, cli.json),
        Command::Jd(args) => lookup_cmd::jd(args, cli.json),
        Command::Rashi { lon } => lookup_cmd::rashi(lon, cli.json),
        Command::Nakshatra { lon } => lookup_cmd::nakshatra(lon, cli.json),
    }
}

/// Pretty-print any serializable value to stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
