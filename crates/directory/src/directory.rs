//! The in-memory name-day directory and its lookups.

use std::collections::{BTreeMap, HashMap};

use namedays_calendar::MonthDay;

use crate::error::DirectoryError;

/// Returns `true` when a name list is the "no name day" placeholder: a
/// single dash (`-`, `–` or `—`).
pub fn is_placeholder(names: &[String]) -> bool {
    matches!(names, [only] if matches!(only.trim(), "-" | "–" | "—"))
}

/// Immutable mapping of `MM-DD` keys to ordered name lists.
///
/// Keys iterate in ascending calendar order. Alongside the entries the
/// directory keeps a case-folded index from name to the first key (in that
/// order) listing it, so name lookups agree with a front-to-back scan.
#[derive(Debug, Clone)]
pub struct NameDayDirectory {
    entries: BTreeMap<MonthDay, Vec<String>>,
    name_index: HashMap<String, MonthDay>,
}

impl NameDayDirectory {
    /// Builds a directory from typed entries.
    ///
    /// Name order within an entry is preserved and duplicates are kept. If
    /// the same key appears twice the later entry replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmptyEntry`] if an entry has no names.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = (MonthDay, Vec<S>)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, names) in entries {
            let names: Vec<String> = names.into_iter().map(Into::into).collect();
            if names.is_empty() {
                return Err(DirectoryError::EmptyEntry {
                    key: key.to_string(),
                });
            }
            map.insert(key, names);
        }

        let mut name_index = HashMap::new();
        for (&key, names) in &map {
            if is_placeholder(names) {
                continue;
            }
            for name in names {
                name_index.entry(name.to_lowercase()).or_insert(key);
            }
        }

        Ok(Self {
            entries: map,
            name_index,
        })
    }

    /// Number of date keys, placeholders included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is present, even as a placeholder.
    pub fn contains_date(&self, key: MonthDay) -> bool {
        self.entries.contains_key(&key)
    }

    /// Iterates all entries in ascending key order, placeholders included.
    pub fn iter(&self) -> impl Iterator<Item = (MonthDay, &[String])> {
        self.entries.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Names for `key` in stored order.
    ///
    /// Returns `None` when the key is absent or holds the placeholder.
    pub fn names_for(&self, key: MonthDay) -> Option<&[String]> {
        self.entries
            .get(&key)
            .filter(|names| !is_placeholder(names))
            .map(Vec::as_slice)
    }

    /// Names for a `MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidDateFormat`] if `date` is not a
    /// well-formed key or names a month/day that does not exist. A valid key
    /// without data is `Ok(None)`.
    pub fn names_for_date(&self, date: &str) -> Result<Option<&[String]>, DirectoryError> {
        let key = MonthDay::parse(date).map_err(|_| DirectoryError::InvalidDateFormat {
            input: date.to_string(),
        })?;
        Ok(self.names_for(key))
    }

    /// The date key of `name`, compared case-insensitively.
    ///
    /// Matching is exact after lowercasing both sides; accents are
    /// significant. When a name is listed under several dates the earliest
    /// key wins.
    pub fn date_for_name(&self, name: &str) -> Option<MonthDay> {
        self.name_index.get(&name.to_lowercase()).copied()
    }
}
