//! # strandwheel-state
//!
//! The interaction state behind the dial: an absolute day and an hour of day,
//! the rules for stepping them, manual date entry, and persistence.
//!
//! ## Quick Start
//!
//! ```
//! use strandwheel_state::{MemoryStore, Session};
//!
//! let mut session = Session::open(MemoryStore::with_values(100, 23));
//! session.bump_hour(1); // midnight rolls the day
//! assert_eq!(session.hour(), 0);
//! assert_eq!(session.controller().absolute_day(), 101);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `controller` | Day and hour stepping with rollover |
//! | `jump` | Manual date parsing and clamping |
//! | `store` | File, memory and fallback stores |
//! | `session` | Controller bound to a store |
//! | `error` | Error types |

mod controller;
mod error;
mod jump;
mod session;
mod store;

pub use controller::{Controller, DEGREES_PER_HOUR, HOURS_PER_DAY, StateChange};
pub use error::StateError;
pub use jump::ManualJump;
pub use session::Session;
pub use store::{
    DEFAULT_DATE_FILE, DEFAULT_HOUR_FILE, DEFAULT_HUB_FILE, DEFAULT_PREVIOUS_FILE, FallbackStore,
    FileStore, MemoryStore, StateKey, Store,
};
