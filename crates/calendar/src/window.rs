//! Date windows around an anchor day.

use chrono::{Days, NaiveDate};

/// Half-width of a centered week.
pub const WEEK_RADIUS: u32 = 3;

/// Largest accepted half-width; a window never spans more than a year.
pub const MAX_WINDOW_RADIUS: u32 = 183;

/// Generates the dates from `anchor - radius` through `anchor + radius`.
///
/// The window is computed on real calendar dates, so month and year
/// boundaries roll over and February 29 is included only in leap years.
/// `radius` is capped at [`MAX_WINDOW_RADIUS`]. Dates that would fall
/// outside chrono's supported range are dropped.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use namedays_calendar::centered_window;
///
/// let anchor = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let dates = centered_window(anchor, 1);
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
/// ```
pub fn centered_window(anchor: NaiveDate, radius: u32) -> Vec<NaiveDate> {
    let radius = Days::new(u64::from(radius.min(MAX_WINDOW_RADIUS)));
    let start = anchor.checked_sub_days(radius).unwrap_or(NaiveDate::MIN);
    let end = anchor.checked_add_days(radius).unwrap_or(NaiveDate::MAX);
    let span = (end - start).num_days().unsigned_abs() as usize + 1;
    let mut dates = Vec::with_capacity(span);
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Generates the centered week (seven days) around `anchor`.
pub fn centered_week(anchor: NaiveDate) -> Vec<NaiveDate> {
    centered_window(anchor, WEEK_RADIUS)
}
