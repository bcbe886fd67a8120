//! Error types for the namedays-calendar crate.

/// Error type for all fallible operations in the namedays-calendar crate.
///
/// This enum covers syntax failures for `MM-DD` date keys as well as
/// month numbers and day-within-month values that are out of range in the
/// leap-year calendar used for name-day keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a date key does not have the `MM-DD` shape.
    #[error("invalid date format: {input:?} (expected MM-DD)")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date_format() {
        let err = CalendarError::InvalidDateFormat {
            input: "1332".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date format: \"1332\" (expected MM-DD)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
