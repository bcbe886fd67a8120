//! Dataset loading: the bundled JSON resource and external files.

use std::collections::BTreeMap;
use std::path::Path;

use namedays_calendar::MonthDay;
use tracing::{debug, info};

use crate::directory::NameDayDirectory;
use crate::error::DirectoryError;

/// File name of the bundled traditional name-day list.
pub const BUNDLED_DATASET: &str = "tradic_vardadienu_saraksts.json";

const BUNDLED_JSON: &str = include_str!("../data/tradic_vardadienu_saraksts.json");

impl NameDayDirectory {
    /// Loads the traditional name-day list compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns a load error if the embedded resource is malformed.
    pub fn bundled() -> Result<Self, DirectoryError> {
        debug!(dataset = BUNDLED_DATASET, "loading bundled dataset");
        Self::from_json(BUNDLED_JSON)
    }

    /// Parses a JSON object mapping `MM-DD` keys to arrays of names.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Parse`] if the text is not such an object
    /// (including non-string names), [`DirectoryError::InvalidKey`] for keys
    /// that are not valid `MM-DD` dates and [`DirectoryError::EmptyEntry`]
    /// for empty name arrays.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (key, names) in raw {
            let date = MonthDay::parse(&key).map_err(|e| DirectoryError::InvalidKey {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            entries.push((date, names));
        }
        let directory = Self::from_entries(entries)?;
        debug!(n_dates = directory.len(), "dataset parsed");
        Ok(directory)
    }

    /// Reads and parses an external dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::FileNotFound`] if `path` does not exist,
    /// [`DirectoryError::Read`] if it cannot be read, and any error of
    /// [`NameDayDirectory::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        if !path.exists() {
            return Err(DirectoryError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), "loading dataset");
        let json = std::fs::read_to_string(path).map_err(|e| DirectoryError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}
