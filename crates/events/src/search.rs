//! Forward searches over the calendar.

use strandwheel_calendar::{CalendarDate, DAYS_PER_STRAND, decompose};
use tracing::debug;

use crate::event::Event;

/// How far ahead a search looks before giving up.
pub const SEARCH_LIMIT_DAYS: u64 = 400 * 365;

/// Returns up to `n` future dates on which `event` occurs.
///
/// The scan starts the day after `from_day`. Strand-based events span a
/// whole strand week, so after a hit the scan jumps a full week ahead to
/// report each occurrence once rather than seven times.
#[tracing::instrument(skip(event), fields(event = %event.name, rule = %event.rule))]
pub fn next_occurrences(event: &Event, from_day: u64, n: usize) -> Vec<CalendarDate> {
    let hop = if event.rule.is_strand_based() {
        DAYS_PER_STRAND
    } else {
        1
    };
    let mut found = Vec::with_capacity(n);
    let mut offset = 1;
    while found.len() < n && offset < SEARCH_LIMIT_DAYS {
        let Some(day) = from_day.checked_add(offset) else {
            break;
        };
        let date = decompose(day);
        if event.matches(date) {
            found.push(date);
            offset += hop;
        } else {
            offset += 1;
        }
    }
    debug!(found = found.len(), "occurrence search finished");
    found
}

/// Returns up to `n` future dates sharing both the strand and the magic phase
/// of `from_day`.
///
/// Candidates are taken a strand week apart, so each match is the same
/// weekday position within its strand as `from_day`.
#[tracing::instrument]
pub fn next_same_combo(from_day: u64, n: usize) -> Vec<CalendarDate> {
    let start = decompose(from_day);
    let mut found = Vec::with_capacity(n);
    let mut offset = DAYS_PER_STRAND;
    while found.len() < n && offset < SEARCH_LIMIT_DAYS {
        let Some(day) = from_day.checked_add(offset) else {
            break;
        };
        let date = decompose(day);
        if date.strand() == start.strand() && date.magic_phase() == start.magic_phase() {
            found.push(date);
        }
        offset += DAYS_PER_STRAND;
    }
    debug!(found = found.len(), "combination search finished");
    found
}

#[cfg(test)]
mod tests {
    use strandwheel_calendar::compose;

    use super::*;
    use crate::event::Recurrence;

    #[test]
    fn yearly_occurrences_one_per_year() {
        let anchor = decompose(compose(0, 3, 10).unwrap());
        let ev = Event::anchored("x", "", Recurrence::Yearly, anchor).unwrap();
        let dates = next_occurrences(&ev, anchor.absolute_day(), 3);
        let years: Vec<u64> = dates.iter().map(|d| d.year()).collect();
        assert_eq!(years, vec![1, 2, 3]);
        assert!(dates.iter().all(|d| d.month() == 2 && d.day() == 10));
    }

    #[test]
    fn once_in_the_past_finds_nothing() {
        let ev = Event::anchored("x", "", Recurrence::Once, decompose(10)).unwrap();
        assert!(next_occurrences(&ev, 10, 5).is_empty());
    }

    #[test]
    fn once_in_the_future_found_once() {
        let ev = Event::anchored("x", "", Recurrence::Once, decompose(30)).unwrap();
        let dates = next_occurrences(&ev, 10, 5);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].absolute_day(), 30);
    }

    #[test]
    fn strand_occurrences_hop_a_week() {
        let ev = Event::anchored("x", "", Recurrence::Strand, decompose(0)).unwrap();
        let dates = next_occurrences(&ev, 0, 3);
        let days: Vec<u64> = dates.iter().map(|d| d.absolute_day()).collect();
        // Day 1 is still strand 1; the week hop then lands on strand 2 and
        // scanning resumes until the cycle returns.
        assert_eq!(days, vec![1, 672, 1344]);
    }

    #[test]
    fn same_combo_every_result_matches() {
        let from = 1000;
        let start = decompose(from);
        let dates = next_same_combo(from, 4);
        assert_eq!(dates.len(), 4);
        for d in &dates {
            assert_eq!(d.strand(), start.strand());
            assert_eq!(d.magic_phase(), start.magic_phase());
            assert_eq!((d.absolute_day() - from) % 7, 0);
        }
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_requested_returns_empty() {
        assert!(next_same_combo(0, 0).is_empty());
    }
}
