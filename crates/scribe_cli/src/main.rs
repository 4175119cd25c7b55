//! advent-scribe: fetch Advent of Code puzzle pages and write them as MDX.

mod args;
mod commands;

use std::process;

use clap::Parser;
use log::LevelFilter;

use crate::args::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    scribe_logging::initialize(level);

    let result = match cli.command {
        Command::Fetch {
            year,
            day,
            base_url,
            staging,
            output,
        } => commands::run_fetch(year, day, &base_url, &staging, &output),
        Command::Convert { input, output } => commands::run_convert(&input, &output),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}
