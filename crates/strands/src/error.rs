//! Error types for the strandwheel-strands crate.

use std::path::PathBuf;

/// Error type for loading a strand directory.
///
/// Individual malformed entries never produce an error; they are skipped
/// during parsing. Only an unreadable file or a document that is not a JSON
/// object is reported.
#[derive(Debug, thiserror::Error)]
pub enum StrandError {
    /// Returned when the directory file cannot be read.
    #[error("failed to read strand directory {}: {source}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the document is not a JSON object keyed by strand number.
    #[error("invalid strand directory: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },
}
