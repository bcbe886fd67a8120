//! `MM-DD` date keys in the 366-day leap-year calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Number of days in each month of a leap year (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year-less calendar day, written as `MM-DD`.
///
/// Validity is checked against a leap year, so `02-29` is a valid key even
/// though it only exists as a real date every fourth year. Ordering is by
/// month, then day, which matches the lexical order of the `MM-DD` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the given month.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Parses a zero-padded `MM-DD` key.
    ///
    /// The text must be exactly two digits, a dash and two digits. Shape
    /// violations are reported as [`CalendarError::InvalidDateFormat`];
    /// well-formed keys with an out-of-range month or day get the range error
    /// from [`MonthDay::new`].
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b'-'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(CalendarError::InvalidDateFormat {
                input: input.to_string(),
            });
        }
        let digit = |i: usize| bytes[i] - b'0';
        Self::new(digit(0) * 10 + digit(1), digit(3) * 10 + digit(4))
    }

    /// Returns the key of a concrete calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono only produces real dates, all of which are valid leap-year keys.
        Self {
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` for `02-29`.
    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Places this key in `year`, or `None` when the day does not exist there
    /// (`02-29` in a common year).
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, u32::from(self.month), u32::from(self.day))
    }

    /// Iterates all 366 keys in ascending order.
    pub fn all() -> impl Iterator<Item = MonthDay> {
        (1..=12u8).flat_map(|month| {
            (1..=DAYS_PER_MONTH[month as usize]).map(move |day| MonthDay { month, day })
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let md = MonthDay::new(1, 1).unwrap();
        assert_eq!(md.month(), 1);
        assert_eq!(md.day(), 1);
        assert!(MonthDay::new(12, 31).is_ok());
    }

    #[test]
    fn new_feb_29_allowed() {
        let md = MonthDay::new(2, 29).unwrap();
        assert!(md.is_leap_day());
    }

    #[test]
    fn new_invalid_month_zero() {
        assert_eq!(
            MonthDay::new(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_month_13() {
        assert_eq!(
            MonthDay::new(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_feb_30() {
        assert_eq!(
            MonthDay::new(2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert_eq!(
            MonthDay::new(4, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 4,
                max_day: 30,
            }
        );
    }

    #[test]
    fn parse_valid() {
        assert_eq!(MonthDay::parse("07-04").unwrap(), MonthDay::new(7, 4).unwrap());
        assert_eq!(MonthDay::parse("12-31").unwrap(), MonthDay::new(12, 31).unwrap());
    }

    #[test]
    fn parse_rejects_bad_shape() {
        for input in ["1332", "1-01", "01-1", "01/01", "001-01", "", "ab-cd", "01-01 ", "０1-01"] {
            assert_eq!(
                MonthDay::parse(input).unwrap_err(),
                CalendarError::InvalidDateFormat {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            MonthDay::parse("13-32").unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            MonthDay::parse("04-31").unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30,
            }
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let md: MonthDay = "02-29".parse().unwrap();
        assert_eq!(md, MonthDay::new(2, 29).unwrap());
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(MonthDay::new(1, 5).unwrap().to_string(), "01-05");
        assert_eq!(MonthDay::new(11, 30).unwrap().to_string(), "11-30");
    }

    #[test]
    fn from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(MonthDay::from_date(date), MonthDay::new(2, 29).unwrap());
    }

    #[test]
    fn in_year_leap_and_common() {
        let leap_day = MonthDay::new(2, 29).unwrap();
        assert_eq!(
            leap_day.in_year(2028),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
        assert_eq!(leap_day.in_year(2026), None);
        assert_eq!(
            MonthDay::new(3, 1).unwrap().in_year(2026),
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
    }

    #[test]
    fn ord_follows_calendar() {
        let jan31 = MonthDay::new(1, 31).unwrap();
        let feb1 = MonthDay::new(2, 1).unwrap();
        let dec1 = MonthDay::new(12, 1).unwrap();
        assert!(jan31 < feb1);
        assert!(feb1 < dec1);
    }

    #[test]
    fn all_has_366_ascending_keys() {
        let keys: Vec<MonthDay> = MonthDay::all().collect();
        assert_eq!(keys.len(), 366);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(keys[0].to_string(), "01-01");
        assert_eq!(keys[59].to_string(), "02-29");
        assert_eq!(keys[365].to_string(), "12-31");
    }

    #[test]
    fn display_parse_roundtrip_all() {
        for md in MonthDay::all() {
            assert_eq!(MonthDay::parse(&md.to_string()).unwrap(), md);
        }
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 366);
    }
}
