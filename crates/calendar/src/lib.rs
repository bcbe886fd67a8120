//! # namedays-calendar
//!
//! Year-less `MM-DD` keys and date windows for the name-day calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"MM-DD\""] -->|"MonthDay::parse()"| B["MonthDay"]
//!     B -->|"Display"| A
//!     C["NaiveDate"] -->|"MonthDay::from_date()"| B
//!     B -->|".in_year()"| C
//!     C -->|"centered_window()"| D["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use namedays_calendar::{MonthDay, centered_week};
//!
//! let key = MonthDay::parse("07-04").unwrap();
//! assert_eq!(key.to_string(), "07-04");
//!
//! // Feb 29 is a valid key, but only a real date in leap years.
//! let leap_day = MonthDay::parse("02-29").unwrap();
//! assert!(leap_day.in_year(2026).is_none());
//!
//! let week = centered_week(NaiveDate::from_ymd_opt(2023, 1, 4).unwrap());
//! assert_eq!(MonthDay::from_date(week[0]).to_string(), "01-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | `MM-DD` key newtype with leap-year validation |
//! | `window` | Centered date windows |
//! | `error` | Error types |

mod error;
mod month_day;
mod window;

pub use error::CalendarError;
pub use month_day::MonthDay;
pub use window::{MAX_WINDOW_RADIUS, WEEK_RADIUS, centered_week, centered_window};
