//! Repeating cycles layered on top of the day count: seasons, magic phases
//! and strands.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Days covered by one strand before the next one begins.
pub const DAYS_PER_STRAND: u64 = 7;

/// Number of strands in the full strand cycle.
pub const STRAND_COUNT: usize = 96;

/// Days covered by one magic phase.
pub const DAYS_PER_MAGIC_PHASE: u64 = 59;

/// Number of magic phases in the weave.
pub const MAGIC_PHASE_COUNT: usize = 3;

/// Number of seasons in a year.
pub const SEASON_COUNT: usize = 4;

/// Season of the year, three months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Season {
    /// Months 0..=2.
    Winter = 0,
    /// Months 3..=5.
    Spring = 1,
    /// Months 6..=8.
    Summer = 2,
    /// Months 9..=11.
    Fall = 3,
}

impl Season {
    /// All seasons in cycle order.
    pub const ALL: [Season; SEASON_COUNT] = [Self::Winter, Self::Spring, Self::Summer, Self::Fall];

    /// Returns the season containing the 0-based `month`.
    ///
    /// Month indices past the end of the year wrap around.
    pub fn from_month_index(month: u8) -> Self {
        Self::ALL[usize::from(month / 3) % SEASON_COUNT]
    }

    /// Returns the season at a 0-based cycle position, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the zero-based cycle position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }
}

/// Phase of the three-step magic weave, advancing every 59 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MagicPhase {
    Low = 0,
    Mid = 1,
    High = 2,
}

impl MagicPhase {
    /// All phases in cycle order.
    pub const ALL: [MagicPhase; MAGIC_PHASE_COUNT] = [Self::Low, Self::Mid, Self::High];

    /// Returns the phase in effect on `absolute_day`.
    pub fn from_absolute_day(absolute_day: u64) -> Self {
        let index = (absolute_day / DAYS_PER_MAGIC_PHASE) % MAGIC_PHASE_COUNT as u64;
        Self::ALL[index as usize]
    }

    /// Returns the phase at a 0-based cycle position, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the zero-based cycle position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }
}

/// Position in the 96-step strand cycle.
///
/// Stored as a 0-based index; the strand directory and every user-facing
/// label use the 1-based [`number`](Strand::number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Strand(u8);

impl Strand {
    /// Returns the strand in effect on `absolute_day`.
    pub fn from_absolute_day(absolute_day: u64) -> Self {
        let index = (absolute_day / DAYS_PER_STRAND) % STRAND_COUNT as u64;
        Self(index as u8)
    }

    /// Creates a strand from a 0-based index, wrapping modulo the cycle length.
    pub fn from_index_wrapping(index: i64) -> Self {
        Self(index.rem_euclid(STRAND_COUNT as i64) as u8)
    }

    /// Creates a strand from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidStrand`] if `number` is not in 1..=96.
    pub fn from_number(number: u16) -> Result<Self, CalendarError> {
        if !(1..=STRAND_COUNT as u16).contains(&number) {
            return Err(CalendarError::InvalidStrand { number });
        }
        Ok(Self((number - 1) as u8))
    }

    /// Returns the 0-based index (0..=95).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Returns the 1-based strand number (1..=96).
    pub fn number(self) -> u16 {
        u16::from(self.0) + 1
    }
}
