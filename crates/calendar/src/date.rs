//! Absolute-day decomposition and composition.

use serde::Serialize;

use crate::cycle::{MagicPhase, Season, Strand};
use crate::error::CalendarError;
use crate::names::month_name;
use crate::year::{DAYS_PER_LEAP_CYCLE, days_before_year, days_in_month, month_lengths, year_length};

/// A calendar date decomposed from an absolute day count.
///
/// Day 0 is the first day of month 0 (Silence) in year 0. Every field is
/// derived from the absolute day; a `CalendarDate` is never the source of
/// truth, only a view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    absolute_day: u64,
    year: u64,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.absolute_day.cmp(&other.absolute_day)
    }
}

impl CalendarDate {
    /// Creates a date from a year, a 1-based month and a 1-based day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for `year`,
    /// or if the resulting absolute day overflows.
    pub fn new(year: u64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let absolute_day = compose(year, month, day)?;
        Ok(Self {
            absolute_day,
            year,
            month: month - 1,
            day,
        })
    }

    /// Decomposes an absolute day count into calendar fields.
    ///
    /// Whole four-year leap cycles are skipped arithmetically; the remaining
    /// years and months are scanned, so the result is identical to walking
    /// year by year from the epoch.
    pub fn from_absolute_day(absolute_day: u64) -> Self {
        let mut year = (absolute_day / DAYS_PER_LEAP_CYCLE) * 4;
        let mut remaining = absolute_day % DAYS_PER_LEAP_CYCLE;
        while remaining >= u64::from(year_length(year)) {
            remaining -= u64::from(year_length(year));
            year += 1;
        }

        let mut month = 0u8;
        for length in month_lengths(year) {
            if remaining < u64::from(length) {
                break;
            }
            remaining -= u64::from(length);
            month += 1;
        }

        Self {
            absolute_day,
            year,
            month,
            day: remaining as u8 + 1,
        }
    }

    /// Returns the absolute day this date was derived from.
    pub fn absolute_day(self) -> u64 {
        self.absolute_day
    }

    /// Returns the year.
    pub fn year(self) -> u64 {
        self.year
    }

    /// Returns the 0-based month index (0..=11).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the 1-based month number (1..=12).
    pub fn month_number(self) -> u8 {
        self.month + 1
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 0-based day of the year.
    pub fn day_of_year(self) -> u16 {
        let before: u16 = month_lengths(self.year)[..usize::from(self.month)]
            .iter()
            .copied()
            .map(u16::from)
            .sum();
        before + u16::from(self.day) - 1
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        month_lengths(self.year)[usize::from(self.month)]
    }

    /// Returns the month's display name.
    pub fn month_name(self) -> &'static str {
        month_name(self.month)
    }

    /// Returns the season, derived from the month.
    pub fn season(self) -> Season {
        Season::from_month_index(self.month)
    }

    /// Returns the magic phase, derived from the absolute day.
    pub fn magic_phase(self) -> MagicPhase {
        MagicPhase::from_absolute_day(self.absolute_day)
    }

    /// Returns the strand, derived from the absolute day.
    pub fn strand(self) -> Strand {
        Strand::from_absolute_day(self.absolute_day)
    }

    /// Returns the following day.
    ///
    /// Month and year boundaries are handled without re-scanning from the
    /// epoch.
    pub fn next(self) -> Self {
        let absolute_day = self.absolute_day + 1;
        if self.day < self.days_in_month() {
            Self {
                absolute_day,
                day: self.day + 1,
                ..self
            }
        } else if usize::from(self.month) + 1 < crate::year::MONTHS_PER_YEAR {
            Self {
                absolute_day,
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                absolute_day,
                year: self.year + 1,
                month: 0,
                day: 1,
            }
        }
    }
}

/// Decomposes an absolute day count into calendar fields.
///
/// Shorthand for [`CalendarDate::from_absolute_day`].
pub fn decompose(absolute_day: u64) -> CalendarDate {
    CalendarDate::from_absolute_day(absolute_day)
}

/// Composes an absolute day count from a year, a 1-based month and a 1-based
/// day.
///
/// This is the exact inverse of [`decompose`] on valid fields.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// if the fields do not name a real date, and [`CalendarError::Overflow`] if
/// the count does not fit in `u64`.
pub fn compose(year: u64, month: u8, day: u8) -> Result<u64, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    let before_month: u64 = month_lengths(year)[..usize::from(month - 1)]
        .iter()
        .copied()
        .map(u64::from)
        .sum();
    days_before_year(year)
        .and_then(|d| d.checked_add(before_month + u64::from(day) - 1))
        .ok_or(CalendarError::Overflow { year })
}
