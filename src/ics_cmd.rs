//! Ics command: export the directory as an iCalendar file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use tracing::{info, info_span};

use namedays_directory::NameDayDirectory;
use namedays_ics::{IcsConfig, generate_ics, write_ics};

use crate::cli::IcsArgs;
use crate::config::IcsToml;

/// Builds the export configuration: CLI flags over config file over defaults.
fn build_ics_config(args: &IcsArgs, toml: &IcsToml) -> IcsConfig {
    let year = args
        .year
        .or(toml.year)
        .unwrap_or_else(|| Local::now().year());
    let mut config = IcsConfig::default()
        .with_year(year)
        .with_dtstamp(Utc::now().naive_utc());
    if let Some(url) = &toml.url {
        config = config.with_url(url.as_str());
    }
    config
}

/// Run the calendar export.
pub fn run(
    directory: &NameDayDirectory,
    args: IcsArgs,
    toml: &IcsToml,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("ics").entered();
    let config = build_ics_config(&args, toml);
    let output: PathBuf = args.output.unwrap_or_else(|| toml.output.clone());

    info!(year = config.year(), "generating calendar");
    let calendar = generate_ics(directory, &config);

    write_ics(&output, &calendar)
        .with_context(|| format!("failed to export calendar: {}", output.display()))?;
    writeln!(
        out,
        "Generated {} with {} name day events",
        output.display(),
        calendar.event_count()
    )?;
    Ok(())
}
