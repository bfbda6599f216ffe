//! Events and the rules that make them recur.

use std::fmt;

use serde::{Deserialize, Serialize};
use strandwheel_calendar::{CalendarDate, MagicPhase, Season};

use crate::error::EventError;

/// When an event comes around again.
///
/// The strand-based rules all require the date's strand to equal the
/// event's anchor strand, then optionally also the season, the magic phase
/// or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    /// Only on the anchor date.
    #[serde(rename = "one")]
    Once,
    /// On the anchor month and day of every year.
    #[serde(rename = "yearly")]
    Yearly,
    /// Whenever the anchor strand is active.
    #[serde(rename = "strand")]
    Strand,
    /// Anchor strand during the anchor season.
    #[serde(rename = "strand+season")]
    StrandSeason,
    /// Anchor strand during the anchor magic phase.
    #[serde(rename = "strand+mag")]
    StrandMagic,
    /// Anchor strand during both the anchor season and magic phase.
    #[serde(rename = "strand+both")]
    StrandBoth,
}

impl Recurrence {
    /// Every rule, in menu order.
    pub const ALL: [Recurrence; 6] = [
        Self::Once,
        Self::Yearly,
        Self::Strand,
        Self::StrandSeason,
        Self::StrandMagic,
        Self::StrandBoth,
    ];

    /// Returns the stored key, e.g. `"strand+mag"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Once => "one",
            Self::Yearly => "yearly",
            Self::Strand => "strand",
            Self::StrandSeason => "strand+season",
            Self::StrandMagic => "strand+mag",
            Self::StrandBoth => "strand+both",
        }
    }

    /// Looks a rule up by its stored key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Returns `true` for the rules keyed on the strand.
    pub fn is_strand_based(self) -> bool {
        !matches!(self, Self::Once | Self::Yearly)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named event anchored on the date it was created.
///
/// The anchor fields are captured once and never recomputed, so the event
/// keeps matching the same strand, season and phase however the notes are
/// moved around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(alias = "text")]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub rule: Recurrence,
    #[serde(rename = "y")]
    pub year: u64,
    /// 0-based month of the anchor date.
    #[serde(rename = "m")]
    pub month: u8,
    #[serde(rename = "d")]
    pub day: u8,
    /// 1-based strand number of the anchor date.
    #[serde(rename = "sid")]
    pub strand: u16,
    pub season: Season,
    #[serde(rename = "mseason")]
    pub magic: MagicPhase,
}

impl Event {
    /// Creates an event anchored on `date`.
    ///
    /// Name and description are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyName`] if the trimmed name is empty.
    pub fn anchored(
        name: &str,
        desc: &str,
        rule: Recurrence,
        date: CalendarDate,
    ) -> Result<Self, EventError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EventError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            desc: desc.trim().to_string(),
            rule,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            strand: date.strand().number(),
            season: date.season(),
            magic: date.magic_phase(),
        })
    }

    /// Returns `true` if the event occurs on `date`.
    pub fn matches(&self, date: CalendarDate) -> bool {
        match self.rule {
            Recurrence::Once => {
                self.year == date.year() && self.month == date.month() && self.day == date.day()
            }
            Recurrence::Yearly => self.month == date.month() && self.day == date.day(),
            rule => {
                if self.strand != date.strand().number() {
                    return false;
                }
                match rule {
                    Recurrence::StrandSeason => self.season == date.season(),
                    Recurrence::StrandMagic => self.magic == date.magic_phase(),
                    Recurrence::StrandBoth => {
                        self.season == date.season() && self.magic == date.magic_phase()
                    }
                    _ => true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strandwheel_calendar::{compose, decompose};

    use super::*;

    fn date(year: u64, month: u8, day: u8) -> CalendarDate {
        decompose(compose(year, month, day).unwrap())
    }

    #[test]
    fn anchored_captures_date_fields() {
        let d = date(3, 5, 10);
        let ev = Event::anchored("  Feast ", " food ", Recurrence::Once, d).unwrap();
        assert_eq!(ev.name, "Feast");
        assert_eq!(ev.desc, "food");
        assert_eq!((ev.year, ev.month, ev.day), (3, 4, 10));
        assert_eq!(ev.strand, d.strand().number());
        assert_eq!(ev.season, Season::Spring);
    }

    #[test]
    fn blank_name_rejected() {
        let err = Event::anchored("   ", "", Recurrence::Yearly, date(0, 1, 1)).unwrap_err();
        assert!(matches!(err, EventError::EmptyName));
    }

    #[test]
    fn once_matches_only_anchor() {
        let ev = Event::anchored("x", "", Recurrence::Once, date(2, 3, 4)).unwrap();
        assert!(ev.matches(date(2, 3, 4)));
        assert!(!ev.matches(date(3, 3, 4)));
    }

    #[test]
    fn yearly_ignores_year() {
        let ev = Event::anchored("x", "", Recurrence::Yearly, date(2, 3, 4)).unwrap();
        assert!(ev.matches(date(9, 3, 4)));
        assert!(!ev.matches(date(9, 3, 5)));
    }

    #[test]
    fn strand_rule_matches_whole_strand_week() {
        let anchor = decompose(70);
        let ev = Event::anchored("x", "", Recurrence::Strand, anchor).unwrap();
        for day in 70..77 {
            assert!(ev.matches(decompose(day)), "day {day}");
        }
        assert!(!ev.matches(decompose(77)));
        assert!(ev.matches(decompose(70 + 96 * 7)));
    }

    #[test]
    fn strand_magic_needs_same_phase() {
        let anchor = decompose(0);
        let ev = Event::anchored("x", "", Recurrence::StrandMagic, anchor).unwrap();
        // Same strand a full cycle later, phase (672 / 59) % 3 = 11 % 3 = 2.
        let later = decompose(96 * 7);
        assert_eq!(later.strand(), anchor.strand());
        assert_ne!(later.magic_phase(), anchor.magic_phase());
        assert!(!ev.matches(later));
    }

    #[test]
    fn recurrence_keys() {
        for rule in Recurrence::ALL {
            assert_eq!(Recurrence::from_key(rule.key()), Some(rule));
        }
        assert_eq!(Recurrence::from_key("weekly"), None);
        assert!(!Recurrence::Yearly.is_strand_based());
        assert!(Recurrence::StrandBoth.is_strand_based());
    }

    #[test]
    fn deserialises_stored_shape() {
        let json = r#"{"text":"Old","rule":"strand+both","y":1,"m":0,"d":3,
            "sid":53,"season":"Winter","mseason":"High"}"#;
        let ev: Event = serde_json::from_str(json).unwrap();
        assert_eq!(ev.name, "Old");
        assert_eq!(ev.desc, "");
        assert_eq!(ev.rule, Recurrence::StrandBoth);
        assert_eq!(ev.magic, MagicPhase::High);
    }
}
