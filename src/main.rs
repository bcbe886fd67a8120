mod cli;
mod config;
mod ics_cmd;
mod logging;
mod lookup_cmd;

use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use namedays_directory::NameDayDirectory;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let directory = load_directory(data_path(cli.data.as_deref(), &config))?;
    info!(n_dates = directory.len(), "name day directory loaded");

    let today = Local::now().date_naive();
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Command::Now) {
        Command::Now => lookup_cmd::now(&directory, today, config.week.radius, &mut out),
        Command::Date(args) => lookup_cmd::date(&directory, &args.date, &mut out),
        Command::Name(args) => lookup_cmd::name(&directory, &args.name, &mut out),
        Command::Week(args) => lookup_cmd::week(
            &directory,
            args.date.unwrap_or(today),
            config.week.radius,
            &mut out,
        ),
        Command::Ics(args) => ics_cmd::run(&directory, args, &config.ics, &mut out),
    }
}

/// `--data` overrides `[data].path`; neither means the bundled dataset.
fn data_path<'a>(cli_data: Option<&'a Path>, config: &'a AppConfig) -> Option<&'a Path> {
    cli_data.or(config.data.path.as_deref())
}

/// Loads the dataset once; every command borrows the result.
fn load_directory(path: Option<&Path>) -> Result<NameDayDirectory> {
    match path {
        Some(path) => NameDayDirectory::from_path(path)
            .with_context(|| format!("failed to load name day data: {}", path.display())),
        None => NameDayDirectory::bundled().context("failed to load bundled name day data"),
    }
}
