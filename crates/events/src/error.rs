//! Error types for the strandwheel-events crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the strandwheel-events crate.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Returned when an event is created or renamed with a blank name.
    #[error("event name must not be empty")]
    EmptyName,

    /// Returned when an event reference does not point at a stored event.
    #[error("no event #{index} on day {day}")]
    NotFound {
        /// Absolute day the event was looked up on.
        day: u64,
        /// Position within that day's list.
        index: usize,
    },

    /// Returned when the notes file cannot be read.
    #[error("failed to read notes {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when the notes file cannot be written.
    #[error("failed to write notes {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when the notebook cannot be encoded as JSON.
    #[error("failed to encode notes: {reason}")]
    Serialize {
        /// Description of the encoding failure.
        reason: String,
    },

    /// Returned when the notes document is not a JSON object.
    #[error("invalid notes document: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },
}
