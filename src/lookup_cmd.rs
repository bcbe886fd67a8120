//! Lookup commands: `now`, `date`, `name` and `week`.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use tracing::{debug, info_span};

use namedays_calendar::MonthDay;
use namedays_directory::{DirectoryError, NameDayDirectory, WeekLine, render_window};

const TODAY_PREFIX: &str = "Šodienas vārda dienas:";
const NO_NAME_DAY_TODAY: &str = "Šodien nav neviena vārda diena.";

/// Show the names for `today`, then the week around it.
pub fn now(
    directory: &NameDayDirectory,
    today: NaiveDate,
    radius: u32,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("now", %today).entered();
    let key = MonthDay::from_date(today);

    writeln!(out)?;
    match directory.names_for(key) {
        Some(names) => writeln!(out, "{TODAY_PREFIX} {}", names.join(", "))?,
        None => writeln!(out, "{NO_NAME_DAY_TODAY}")?,
    }
    writeln!(out)?;
    write_lines(&render_window(directory, today, radius), out)?;
    writeln!(out)?;
    Ok(())
}

/// Show the names for a `MM-DD` date typed by the user.
///
/// A malformed date is reported on `out` and is not an error.
pub fn date(directory: &NameDayDirectory, input: &str, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("date", input).entered();

    writeln!(out)?;
    match directory.names_for_date(input) {
        Ok(Some(names)) => writeln!(out, "{input} vārda dienas: {}", names.join(", "))?,
        // Same wording as `now`, even for a date other than today.
        Ok(None) => writeln!(out, "{NO_NAME_DAY_TODAY}")?,
        Err(DirectoryError::InvalidDateFormat { .. }) => {
            debug!("rejected date input");
            writeln!(out, "Incorrect date format: {input} (expected MM-DD)")?;
        }
        Err(e) => return Err(e.into()),
    }
    writeln!(out)?;
    Ok(())
}

/// Show the name day of `name`.
pub fn name(directory: &NameDayDirectory, name: &str, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("name", name).entered();
    let query = name.trim();

    writeln!(out)?;
    match directory.date_for_name(query) {
        Some(date) => writeln!(out, "{query}: vārda diena ir {date} (MM-DD)")?,
        None => writeln!(out, "Nevarēju atrast vārda dienu: {query}")?,
    }
    writeln!(out)?;
    Ok(())
}

/// Show the window of days around `anchor`.
pub fn week(
    directory: &NameDayDirectory,
    anchor: NaiveDate,
    radius: u32,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("week", %anchor, radius).entered();

    writeln!(out)?;
    write_lines(&render_window(directory, anchor, radius), out)?;
    writeln!(out)?;
    Ok(())
}

fn write_lines(lines: &[WeekLine], out: &mut impl Write) -> Result<()> {
    for line in lines {
        if line.highlighted {
            writeln!(out, "{}", line.text().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
