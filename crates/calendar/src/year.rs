//! Leap-year rule and month-length tables.

use crate::error::CalendarError;

/// Number of months in every year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Month lengths of a common year (index 0 = Silence, index 1 = Khord, ...).
pub const BASE_MONTH_LENGTHS: [u8; MONTHS_PER_YEAR] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in one leap cycle: a leap year followed by three common years.
pub(crate) const DAYS_PER_LEAP_CYCLE: u64 = 366 + 3 * 365;

/// Returns `true` if `year` carries the extra day in its second month.
///
/// Every fourth year is a leap year, starting with year 0. There is no
/// century exception.
pub fn is_leap_year(year: u64) -> bool {
    year % 4 == 0
}

/// Returns the number of days in `year` (366 for leap years, 365 otherwise).
pub fn year_length(year: u64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the month-length table for `year`.
pub fn month_lengths(year: u64) -> [u8; MONTHS_PER_YEAR] {
    let mut lengths = BASE_MONTH_LENGTHS;
    if is_leap_year(year) {
        lengths[1] = 29;
    }
    lengths
}

/// Returns the number of days in a 1-based `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: u64, month: u8) -> Result<u8, CalendarError> {
    if !(1..=MONTHS_PER_YEAR as u8).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_lengths(year)[usize::from(month - 1)])
}

/// Returns the number of days from the epoch to the first day of `year`.
///
/// Returns `None` if the count does not fit in `u64`.
pub(crate) fn days_before_year(year: u64) -> Option<u64> {
    let cycles = year / 4;
    let remainder = year % 4;
    // The first year of each cycle is the leap year.
    let tail = if remainder == 0 { 0 } else { 366 + (remainder - 1) * 365 };
    cycles.checked_mul(DAYS_PER_LEAP_CYCLE)?.checked_add(tail)
}
