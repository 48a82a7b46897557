mod calendar;
mod cli;
mod commands;
mod config;
mod form;
mod logging;
mod model;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let (mut config, source) = config::load(args.config.as_deref())?;
    config.apply(&args.overrides());

    let command = args.command.unwrap_or(cli::Command::Tui);
    logging::init(&config, matches!(command, cli::Command::Tui))?;
    log::debug!("configuration source: {:?}", source);

    match command {
        cli::Command::Tui => commands::tui(&config),
        cli::Command::Calendar { year, month } => commands::calendar(year, month),
        cli::Command::Config => commands::show_config(&config, &source),
    }
}
