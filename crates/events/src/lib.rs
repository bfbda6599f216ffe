//! # strandwheel-events
//!
//! Notes attached to calendar days: a free-text party log and named events
//! that recur by date or by strand.
//!
//! ## Quick Start
//!
//! ```
//! use strandwheel_calendar::decompose;
//! use strandwheel_events::{Event, NoteBook, Recurrence, next_occurrences};
//!
//! let today = 700;
//! let event = Event::anchored("Tide market", "", Recurrence::Strand, decompose(today)).unwrap();
//!
//! let mut book = NoteBook::new();
//! book.add_event(today, event.clone());
//! assert_eq!(book.active_events(today).len(), 1);
//!
//! let upcoming = next_occurrences(&event, today, 2);
//! assert!(upcoming.iter().all(|d| d.strand() == decompose(today).strand()));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | Events and recurrence rules |
//! | `notebook` | Per-day notes with JSON persistence |
//! | `search` | Next occurrences and same-combination dates |
//! | `error` | Error types |

mod error;
mod event;
mod notebook;
mod search;

pub use error::EventError;
pub use event::{Event, Recurrence};
pub use notebook::{DayNotes, EventRef, NoteBook};
pub use search::{SEARCH_LIMIT_DAYS, next_occurrences, next_same_combo};
