//! Error types for namedays-directory.

use std::path::PathBuf;

/// Error type for all fallible operations in the namedays-directory crate.
///
/// Load failures (missing file, unreadable file, malformed JSON, invalid
/// keys, empty entries) are fatal for the caller; an invalid date typed by a
/// user is an ordinary input error that should be reported and survived.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Returned when a date query is not a valid `MM-DD` key.
    #[error("incorrect date format: {input:?} (expected MM-DD)")]
    InvalidDateFormat {
        /// The text that was queried.
        input: String,
    },

    /// Returned when an external dataset file does not exist.
    #[error("dataset not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when an external dataset file exists but cannot be read.
    #[error("failed to read dataset {}: {reason}", path.display())]
    Read {
        /// Path of the dataset file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the dataset is not a JSON object of string arrays.
    #[error("malformed dataset: {reason}")]
    Parse {
        /// Description of the JSON failure.
        reason: String,
    },

    /// Returned when a dataset key is not a valid `MM-DD` key.
    #[error("malformed dataset: invalid date key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// Returned when a dataset key maps to an empty name list.
    #[error("malformed dataset: no names listed for {key}")]
    EmptyEntry {
        /// The offending key.
        key: String,
    },
}

impl DirectoryError {
    /// Returns `true` for failures to load a dataset, as opposed to bad
    /// query input.
    pub fn is_data_load(&self) -> bool {
        !matches!(self, DirectoryError::InvalidDateFormat { .. })
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Parse {
            reason: e.to_string(),
        }
    }
}
