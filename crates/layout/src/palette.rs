//! Gradient colour pairs for the fixed-cycle rings.

use serde::{Deserialize, Serialize};
use strandwheel_calendar::{MAGIC_PHASE_COUNT, MONTHS_PER_YEAR, SEASON_COUNT};

/// Outer and inner stop of a two-stop radial gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub outer: String,
    pub inner: String,
}

impl ColorPair {
    /// Creates a colour pair.
    pub fn new(outer: impl Into<String>, inner: impl Into<String>) -> Self {
        Self {
            outer: outer.into(),
            inner: inner.into(),
        }
    }
}

/// Colours for the month, season and magic-phase rings.
///
/// Day and year segments are unfilled and strand colours come from the
/// strand directory, so neither appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub months: [ColorPair; MONTHS_PER_YEAR],
    pub seasons: [ColorPair; SEASON_COUNT],
    pub magic_phases: [ColorPair; MAGIC_PHASE_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            months: [
                ColorPair::new("#323d5a", "#6b717e"),
                ColorPair::new("#20757a", "#406e95"),
                ColorPair::new("#47e05a", "#86eec2"),
                ColorPair::new("#68d9be", "#649a99"),
                ColorPair::new("#23a005", "#65e047"),
                ColorPair::new("#bcff5b", "#679b1c"),
                ColorPair::new("#f7ff00", "#fffdd0"),
                ColorPair::new("#f2e02c", "#ddeb00"),
                ColorPair::new("#dfa500", "#ffda7d"),
                ColorPair::new("#d6c7ae", "#f1cd90"),
                ColorPair::new("#cdcdcd", "#faf6ee"),
                ColorPair::new("#cdcdcd", "#faf6ee"),
            ],
            seasons: [
                ColorPair::new("#b9d2ff", "#dee9ff"),
                ColorPair::new("#a9e6a0", "#d6f7ce"),
                ColorPair::new("#ffe998", "#fff5ce"),
                ColorPair::new("#ffb47a", "#ffd9bf"),
            ],
            magic_phases: [
                ColorPair::new("#9daca7", "#b9d5cb"),
                ColorPair::new("#3d87a1", "#7bc7ca"),
                ColorPair::new("#ff5335", "#906b61"),
            ],
        }
    }
}
