//! # strandwheel-calendar
//!
//! Pure date arithmetic for the strand calendar: twelve fixed-length months,
//! a leap day every fourth year, and three cycles running on top of the day
//! count (seasons, magic phases and the 96-step strand cycle).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["absolute day (u64)"] -->|"decompose()"| B["CalendarDate"]
//!     C["(year, month, day)"] -->|"compose()"| A
//!     B -->|".season()"| D["Season"]
//!     B -->|".magic_phase()"| E["MagicPhase"]
//!     B -->|".strand()"| F["Strand"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use strandwheel_calendar::{compose, decompose, ordinal};
//!
//! let day = compose(4, 2, 29).unwrap(); // leap day of year 4
//! let date = decompose(day);
//! assert_eq!((date.year(), date.month(), date.day()), (4, 1, 29));
//! assert_eq!(ordinal(u64::from(date.day())), "29th");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Leap rule and month-length tables |
//! | `date` | Absolute-day decomposition and composition |
//! | `cycle` | Seasons, magic phases and strands |
//! | `names` | Month names |
//! | `ordinal` | Ordinal suffixes |
//! | `error` | Error types |

mod cycle;
mod date;
mod error;
mod names;
mod ordinal;
mod year;

pub use cycle::{
    DAYS_PER_MAGIC_PHASE, DAYS_PER_STRAND, MAGIC_PHASE_COUNT, MagicPhase, SEASON_COUNT,
    STRAND_COUNT, Season, Strand,
};
pub use date::{CalendarDate, compose, decompose};
pub use error::CalendarError;
pub use names::{MONTH_NAMES, month_name};
pub use ordinal::{ordinal, ordinal_suffix};
pub use year::{
    BASE_MONTH_LENGTHS, MONTHS_PER_YEAR, days_in_month, is_leap_year, month_lengths, year_length,
};
