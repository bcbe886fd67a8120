//! Error types for namedays-ics.

use std::path::PathBuf;

/// Error type for all fallible operations in the namedays-ics crate.
#[derive(Debug, thiserror::Error)]
pub enum IcsError {
    /// Returned when the calendar file cannot be written.
    #[error("failed to write calendar {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_write() {
        let err = IcsError::Write {
            path: PathBuf::from("/readonly/out.ics"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write calendar /readonly/out.ics: permission denied"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IcsError>();
    }
}
