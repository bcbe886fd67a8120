//! Week rendering: a window of dates around an anchor, one line per day.

use std::fmt;

use chrono::NaiveDate;
use namedays_calendar::{MonthDay, WEEK_RADIUS, centered_window};

use crate::directory::NameDayDirectory;

/// One rendered day of a week window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLine {
    /// The concrete calendar date.
    pub date: NaiveDate,
    /// The `MM-DD` key of `date`.
    pub key: MonthDay,
    /// Names for the day, `None` when the dataset has none.
    pub names: Option<Vec<String>>,
    /// Set only on the anchor day.
    pub highlighted: bool,
}

impl WeekLine {
    /// The display text, without any highlighting.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.names {
            Some(names) => write!(f, "{} vārda dienas: {}", self.key, names.join(", ")),
            None => write!(f, "{} nav neviena vārda diena.", self.key),
        }
    }
}

/// Renders the days from `anchor - radius` through `anchor + radius`.
///
/// `radius` is capped at [`namedays_calendar::MAX_WINDOW_RADIUS`].
pub fn render_window(directory: &NameDayDirectory, anchor: NaiveDate, radius: u32) -> Vec<WeekLine> {
    centered_window(anchor, radius)
        .into_iter()
        .map(|date| {
            let key = MonthDay::from_date(date);
            WeekLine {
                date,
                key,
                names: directory.names_for(key).map(<[String]>::to_vec),
                highlighted: date == anchor,
            }
        })
        .collect()
}

/// Renders the centered seven-day week around `anchor`.
pub fn render_week(directory: &NameDayDirectory, anchor: NaiveDate) -> Vec<WeekLine> {
    render_window(directory, anchor, WEEK_RADIUS)
}
