use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Latvian name day calendar.
#[derive(Parser)]
#[command(
    name = "lv-namedays",
    version,
    about = "Lookup in the Latvian name day calendar",
    long_about = "Lookup in the Latvian name day calendar.\n\n\
                  Shows today's name days, the names for a given date, or the \
                  name day of a given name. Runs `now` when no command is given."
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use this JSON dataset instead of the bundled name day list.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's name days and the surrounding week.
    Now,
    /// Show the name days for a date.
    Date(DateArgs),
    /// Show the name day for a name.
    Name(NameArgs),
    /// Show a week of name days centered on a date.
    Week(WeekArgs),
    /// Export the name days as an iCalendar (.ics) file.
    Ics(IcsArgs),
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as MM-DD, e.g. 07-04.
    pub date: String,
}

/// Arguments for the `name` subcommand.
#[derive(clap::Args)]
pub struct NameArgs {
    /// Name to look up (case-insensitive).
    pub name: String,
}

/// Arguments for the `week` subcommand.
#[derive(clap::Args)]
pub struct WeekArgs {
    /// Anchor date as YYYY-MM-DD (default: today).
    pub date: Option<NaiveDate>,
}

/// Arguments for the `ics` subcommand.
#[derive(clap::Args)]
pub struct IcsArgs {
    /// Year of the first occurrence of each event (default: from config or current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Output .ics path (default: from config or latvian_namedays.ics).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
