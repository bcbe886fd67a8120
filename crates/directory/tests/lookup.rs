//! Lookup properties over the bundled dataset.

use namedays_calendar::MonthDay;
use namedays_directory::{DirectoryError, NameDayDirectory, is_placeholder};

fn bundled() -> NameDayDirectory {
    NameDayDirectory::bundled().unwrap()
}

fn md(s: &str) -> MonthDay {
    MonthDay::parse(s).unwrap()
}

#[test]
fn every_day_of_the_leap_year_is_present() {
    let dir = bundled();
    for key in MonthDay::all() {
        assert!(dir.contains_date(key), "missing {key}");
    }
}

#[test]
fn real_entries_return_their_names() {
    let dir = bundled();
    for (key, stored) in dir.iter() {
        if is_placeholder(stored) {
            continue;
        }
        let names = dir.names_for_date(&key.to_string()).unwrap().unwrap();
        assert!(!names.is_empty());
        assert_eq!(names, stored, "names for {key}");
    }
}

#[test]
fn leap_day_is_no_data() {
    let dir = bundled();
    assert!(dir.contains_date(md("02-29")));
    assert_eq!(dir.names_for_date("02-29").unwrap(), None);
}

#[test]
fn malformed_dates_rejected() {
    let dir = bundled();
    for input in ["13-32", "1332"] {
        let err = dir.names_for_date(input).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidDateFormat { .. }));
        assert!(!err.is_data_load());
    }
}

#[test]
fn known_entries() {
    let dir = bundled();
    assert_eq!(
        dir.names_for(md("01-01")).unwrap(),
        ["Laimnesis", "Solvita", "Solvija"]
    );
    assert_eq!(dir.names_for(md("02-14")).unwrap(), ["Valentīns"]);
    assert_eq!(
        dir.names_for(md("07-04")).unwrap(),
        ["Ulvis", "Uldis", "Sandis", "Sandijs"]
    );
    assert_eq!(dir.names_for(md("12-24")).unwrap(), ["Ādams", "Ieva"]);
}

#[test]
fn uldis_found_in_lowercase() {
    assert_eq!(bundled().date_for_name("uldis"), Some(md("07-04")));
}

#[test]
fn name_search_ignores_case() {
    let dir = bundled();
    for (_, names) in dir.iter() {
        for name in names {
            let exact = dir.date_for_name(name);
            assert_eq!(dir.date_for_name(&name.to_uppercase()), exact, "{name}");
            assert_eq!(dir.date_for_name(&name.to_lowercase()), exact, "{name}");
        }
    }
}

#[test]
fn name_to_date_round_trip() {
    let dir = bundled();
    for (key, names) in dir.iter() {
        if is_placeholder(names) {
            continue;
        }
        for name in names {
            let found = dir.date_for_name(name).unwrap();
            // Names listed on several days resolve to the earliest one.
            assert!(found <= key, "{name}: {found} after {key}");
            let listed = dir.names_for(found).unwrap();
            assert!(
                listed.iter().any(|n| n.to_lowercase() == name.to_lowercase()),
                "{name} not listed on {found}"
            );
            assert_eq!(dir.date_for_name(name), Some(found));
        }
    }
}

#[test]
fn repeated_name_resolves_to_first_date() {
    let dir = bundled();
    // Listed on both 06-02 and 12-13.
    assert_eq!(dir.date_for_name("Lūcija"), Some(md("06-02")));
    assert_eq!(dir.date_for_name("LŪCIJA"), Some(md("06-02")));
}

#[test]
fn accents_are_significant() {
    let dir = bundled();
    assert_eq!(dir.date_for_name("Adams"), None);
    assert_eq!(dir.date_for_name("Valentins"), None);
    assert_eq!(dir.date_for_name("valentīns"), Some(md("02-14")));
}

#[test]
fn unknown_name() {
    assert_eq!(bundled().date_for_name("John"), None);
}
