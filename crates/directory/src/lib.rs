//! Latvian name-day directory.
//!
//! Loads a static mapping of `MM-DD` keys to ordered name lists and answers
//! three kinds of query: names for a date, the date for a name, and a
//! rendered week around an anchor day.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use namedays_directory::{NameDayDirectory, render_week};
//!
//! let directory = NameDayDirectory::bundled().unwrap();
//!
//! let names = directory.names_for_date("07-04").unwrap().unwrap();
//! assert!(names.iter().any(|n| n == "Uldis"));
//!
//! let date = directory.date_for_name("uldis").unwrap();
//! assert_eq!(date.to_string(), "07-04");
//!
//! let anchor = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
//! let week = render_week(&directory, anchor);
//! assert!(week[3].highlighted);
//! ```
//!
//! # Architecture
//!
//! ```text
//! NameDayDirectory::bundled() / from_json() / from_path()   (load.rs)
//!   └─ from_entries()                                        (directory.rs)
//!        ├─ names_for() / names_for_date()
//!        ├─ date_for_name()          (case-folded first-match index)
//!        └─ render_week()            (week.rs)
//! ```
//!
//! The dataset marks days without names (February 29) with a single dash;
//! lookups report those as `None`.

mod directory;
mod error;
mod load;
mod week;

pub use directory::{NameDayDirectory, is_placeholder};
pub use error::DirectoryError;
pub use load::BUNDLED_DATASET;
pub use week::{WeekLine, render_week, render_window};
