//! Error types for the strandwheel-calendar crate.

/// Error type for all fallible operations in the strandwheel-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values and strand numbers, plus arithmetic overflow when composing dates
/// for absurdly large years.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month (1..=12) for which the day is invalid.
        month: u8,
        /// The year the month belongs to.
        year: u64,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a 1-based strand number is outside 1..=96.
    #[error("invalid strand number: {number} (must be 1..=96)")]
    InvalidStrand {
        /// The invalid strand number that was provided.
        number: u16,
    },

    /// Returned when the absolute day of a date does not fit in `u64`.
    #[error("absolute day overflows for year {year}")]
    Overflow {
        /// The year that could not be composed.
        year: u64,
    },
}
