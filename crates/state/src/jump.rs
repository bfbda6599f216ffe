//! Parsing and clamping of manually entered dates.

use strandwheel_calendar::{MONTHS_PER_YEAR, compose, month_lengths};

use crate::error::StateError;

/// A validated manual date jump.
///
/// Each field is clamped into range rather than rejected: negative years
/// become 0, months land in 1..=12 and days in 1..=month length for that
/// year. Only non-numeric input is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualJump {
    year: u64,
    month: u8,
    day: u8,
    absolute_day: u64,
}

impl ManualJump {
    /// Parses the three raw text fields.
    ///
    /// Each field may be an integer or a finite decimal (truncated toward
    /// zero). Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidField`] for the first field that is not a
    /// finite number, or [`StateError::Calendar`] if the clamped year is too
    /// large to represent.
    pub fn parse(year: &str, month: &str, day: &str) -> Result<Self, StateError> {
        let year = parse_field("year", year)?;
        let month = parse_field("month", month)?;
        let day = parse_field("day", day)?;
        Self::from_numbers(year, month, day)
    }

    /// Clamps already-parsed numbers into a valid date.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Calendar`] if the year overflows the day count.
    pub fn from_numbers(year: i64, month: i64, day: i64) -> Result<Self, StateError> {
        let year = year.max(0) as u64;
        let month = month.clamp(1, MONTHS_PER_YEAR as i64) as u8;
        let max_day = month_lengths(year)[usize::from(month - 1)];
        let day = day.clamp(1, i64::from(max_day)) as u8;
        let absolute_day = compose(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            absolute_day,
        })
    }

    /// Returns the clamped year.
    pub fn year(&self) -> u64 {
        self.year
    }

    /// Returns the clamped 1-based month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the clamped 1-based day.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the absolute day this jump lands on.
    pub fn absolute_day(&self) -> u64 {
        self.absolute_day
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<i64, StateError> {
    let text = raw.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(StateError::InvalidField {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_date() {
        let jump = ManualJump::parse("3", "2", "14").unwrap();
        assert_eq!((jump.year(), jump.month(), jump.day()), (3, 2, 14));
        assert_eq!(jump.absolute_day(), compose(3, 2, 14).unwrap());
    }

    #[test]
    fn month_above_range_clamps_to_twelve() {
        let jump = ManualJump::parse("5", "15", "1").unwrap();
        assert_eq!(jump.month(), 12);
    }

    #[test]
    fn day_above_range_clamps_to_month_length() {
        let jump = ManualJump::parse("5", "3", "99").unwrap();
        assert_eq!(jump.day(), 31);
    }

    #[test]
    fn leap_day_in_common_year_clamps() {
        let jump = ManualJump::parse("3", "2", "29").unwrap();
        assert_eq!(jump.day(), 28);
        let leap = ManualJump::parse("4", "2", "29").unwrap();
        assert_eq!(leap.day(), 29);
    }

    #[test]
    fn low_values_clamp_up() {
        let jump = ManualJump::parse("-20", "0", "-4").unwrap();
        assert_eq!((jump.year(), jump.month(), jump.day()), (0, 1, 1));
        assert_eq!(jump.absolute_day(), 0);
    }

    #[test]
    fn decimals_truncate_and_whitespace_is_ignored() {
        let jump = ManualJump::parse(" 7.9 ", "4.2", "10.99\n").unwrap();
        assert_eq!((jump.year(), jump.month(), jump.day()), (7, 4, 10));
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let err = ManualJump::parse("1", "abc", "1").unwrap_err();
        assert!(matches!(err, StateError::InvalidField { field: "month", .. }));

        for bad in ["", "NaN", "inf", "twelve"] {
            let err = ManualJump::parse(bad, "1", "1").unwrap_err();
            assert!(matches!(err, StateError::InvalidField { field: "year", .. }));
        }
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = ManualJump::parse("x", "y", "z").unwrap_err();
        assert!(matches!(err, StateError::InvalidField { field: "year", .. }));
    }
}
