//! # strandwheel-strands
//!
//! The strand directory: an externally maintained JSON document mapping each
//! of the 96 strand numbers to a name, a hidden flag, a colour pair and
//! per-phase effect text.
//!
//! Loading is forgiving. A missing file yields an empty directory through
//! [`StrandDirectory::load_or_empty`], and malformed entries are dropped one
//! at a time, so a lookup always produces something renderable.
//!
//! ```
//! use strandwheel_calendar::Strand;
//! use strandwheel_strands::{NO_STRAND, StrandDirectory};
//!
//! let dir = StrandDirectory::from_json_str(r#"{"1": {"Name": "Ember"}}"#).unwrap();
//! assert_eq!(dir.display_name(Strand::from_number(1).unwrap()), "Ember");
//! assert_eq!(dir.display_name(Strand::from_number(2).unwrap()), NO_STRAND);
//! ```

mod directory;
mod entry;
mod error;

pub use directory::{NO_EFFECTS, NO_STRAND, StrandDirectory};
pub use entry::StrandEntry;
pub use error::StrandError;
