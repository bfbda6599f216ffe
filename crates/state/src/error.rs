//! Error types for the strandwheel-state crate.

use std::path::PathBuf;

use strandwheel_calendar::CalendarError;

use crate::store::StateKey;

/// Error type for all fallible operations in the strandwheel-state crate.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Returned when a manual-jump field is not a finite number.
    #[error("{field} must be a number, got {value:?}")]
    InvalidField {
        /// Which field was rejected (`"year"`, `"month"` or `"day"`).
        field: &'static str,
        /// The text that was entered.
        value: String,
    },

    /// Wraps an error from the calendar arithmetic.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a state file cannot be read or written.
    #[error("state file {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a stored value is not an integer.
    #[error("stored {key} value is not an integer: {value:?}")]
    Corrupt {
        /// Key whose value is unreadable.
        key: StateKey,
        /// The stored text.
        value: String,
    },
}
