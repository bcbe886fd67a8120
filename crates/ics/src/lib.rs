//! iCalendar export of the name-day directory.
//!
//! Every dated entry becomes an all-day `VEVENT` repeating yearly, with the
//! names as the summary and a UID derived from the `MM-DD` key, so
//! re-importing a regenerated file updates events instead of duplicating
//! them.
//!
//! ```
//! use namedays_directory::NameDayDirectory;
//! use namedays_ics::{IcsConfig, generate_ics};
//!
//! let directory = NameDayDirectory::bundled().unwrap();
//! let calendar = generate_ics(&directory, &IcsConfig::default().with_year(2026));
//! // February 29 is skipped.
//! assert_eq!(calendar.event_count(), 365);
//! assert!(calendar.to_ics_string().starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

mod config;
mod error;
mod generate;

pub use config::IcsConfig;
pub use error::IcsError;
pub use generate::{IcsCalendar, escape_text, generate_ics, write_ics};
