//! Calendar generation and serialization.

use std::path::Path;

use namedays_directory::{NameDayDirectory, is_placeholder};
use tracing::{debug, info};

use crate::config::IcsConfig;
use crate::error::IcsError;

/// Maximum content line length in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// A generated iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsCalendar {
    lines: Vec<String>,
    event_count: usize,
}

impl IcsCalendar {
    /// Number of `VEVENT` components.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Unfolded content lines, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Serializes the calendar: lines folded at 75 octets and terminated by CRLF.
    pub fn to_ics_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&fold_line(line));
            out.push_str("\r\n");
        }
        out
    }
}

/// Escapes a TEXT property value (backslash, comma, semicolon, newline).
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits a content line into 75-octet pieces joined by CRLF + space,
/// never cutting through a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    // Continuation lines lose one octet to the leading space.
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;
    for c in line.chars() {
        if used + c.len_utf8() > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += c.len_utf8();
    }
    out
}

/// Builds a calendar of yearly all-day events, one per name-day date.
///
/// Dates are visited in ascending order. Placeholder entries are skipped, as
/// are keys that are not a real date in the configured year (February 29 in
/// a common year).
pub fn generate_ics(directory: &NameDayDirectory, config: &IcsConfig) -> IcsCalendar {
    let dtstamp = config.dtstamp().format("%Y%m%dT%H%M%SZ").to_string();
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", config.product_id()),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(config.calendar_name())),
        format!("X-WR-TIMEZONE:{}", config.timezone()),
        format!("X-WR-CALDESC:{}", escape_text(config.calendar_description())),
    ];

    let mut event_count = 0;
    for (key, names) in directory.iter() {
        if is_placeholder(names) {
            continue;
        }
        let Some(start) = key.in_year(config.year()) else {
            debug!(%key, year = config.year(), "date does not exist in year, skipped");
            continue;
        };
        let Some(end) = start.succ_opt() else {
            continue;
        };

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("DTSTART;VALUE=DATE:{}", start.format("%Y%m%d")),
            format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")),
            format!("DTSTAMP:{dtstamp}"),
            format!("UID:nameday-{key}@lv-namedays"),
            format!("SUMMARY:{}", escape_text(&names.join(", "))),
            format!("URL:{}", config.url()),
            "RRULE:FREQ=YEARLY".to_string(),
            "TRANSP:TRANSPARENT".to_string(),
            "STATUS:CONFIRMED".to_string(),
            "SEQUENCE:0".to_string(),
            "END:VEVENT".to_string(),
        ]);
        event_count += 1;
    }
    lines.push("END:VCALENDAR".to_string());

    IcsCalendar { lines, event_count }
}

/// Writes a calendar to `path`.
///
/// # Errors
///
/// Returns [`IcsError::Write`] if the file cannot be written.
pub fn write_ics(path: &Path, calendar: &IcsCalendar) -> Result<(), IcsError> {
    std::fs::write(path, calendar.to_ics_string()).map_err(|e| IcsError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), events = calendar.event_count(), "calendar written");
    Ok(())
}
