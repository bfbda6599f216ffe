//! # strandwheel-layout
//!
//! Turns a decomposed date into the angular layout of the six-ring calendar
//! dial: which segments each ring shows, where each sits, how far the ring
//! must turn to bring the current value under the pointer, and how each
//! label is rotated so it stays upright.
//!
//! The engine is stateless. Everything is recomputed from a [`DialState`]
//! and the strand directory on each call; drawing and animation belong to the
//! renderer consuming [`DialLayout`].
//!
//! # Rings
//!
//! ```text
//!  outermost ─▶ day     full month (or a window wrapping within it)
//!               strand  15-slot window over the 96-strand cycle
//!               month   all 12, turned to the current month
//!               magic   all 3, turned to the current phase
//!               season  all 4, turned to the current season
//!  innermost ─▶ year    7-slot window centred on the current year
//! ```
//!
//! # Quick start
//!
//! ```
//! use strandwheel_calendar::decompose;
//! use strandwheel_layout::{DialState, LayoutConfig, RingKind, layout_dial};
//! use strandwheel_strands::StrandDirectory;
//!
//! let state = DialState::new(decompose(400), 6);
//! let dial = layout_dial(&state, &StrandDirectory::new(), &LayoutConfig::new()).unwrap();
//! let strands = dial.ring(RingKind::Strand).unwrap();
//! assert_eq!(strands.segments.len(), 15);
//! assert_eq!(strands.current().unwrap().label, "No Strand");
//! ```

mod angle;
mod banner;
mod config;
mod dial;
mod error;
mod geometry;
mod palette;
mod ring;
mod window;

pub use angle::{normalize_degrees, polar_to_xy, shortest_cycle_delta, upright_text_rotation};
pub use banner::{date_banner, date_line};
pub use config::LayoutConfig;
pub use dial::{
    DEGREES_PER_HOUR, DialLayout, DialState, Hub, day_ring, layout_dial, magic_ring, month_ring,
    pointers, season_ring, strand_ring, strand_transition_start, year_ring,
};
pub use error::LayoutError;
pub use geometry::DialGeometry;
pub use palette::{ColorPair, Palette};
pub use ring::{Fill, Pointer, Ring, RingKind, Segment};
pub use window::{cyclic_window, linear_window, month_day_window, window_offsets};
