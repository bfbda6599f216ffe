//! Per-day notes: a free-text party log and a list of events.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strandwheel_calendar::decompose;
use tracing::{debug, info, warn};

use crate::error::EventError;
use crate::event::Event;

/// Location of one stored event: the day it was created on and its position
/// in that day's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventRef {
    pub day: u64,
    pub index: usize,
}

/// Everything written down for a single day.
///
/// Events that could not be read are carried along untouched in
/// `unrecognised` and written back after the readable ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayNotes {
    pub party: String,
    pub events: Vec<Event>,
    unrecognised: Vec<serde_json::Value>,
}

impl DayNotes {
    /// Returns `true` if there is no party log and no event, readable or not.
    pub fn is_empty(&self) -> bool {
        self.party.is_empty() && self.events.is_empty() && self.unrecognised.is_empty()
    }

    /// Returns the stored events that could not be read.
    pub fn unrecognised(&self) -> &[serde_json::Value] {
        &self.unrecognised
    }
}

#[derive(Deserialize)]
struct RawDay {
    #[serde(default)]
    party: String,
    #[serde(default)]
    events: Vec<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredEvent<'a> {
    Known(&'a Event),
    Raw(&'a serde_json::Value),
}

#[derive(Serialize)]
struct StoredDay<'a> {
    party: &'a str,
    events: Vec<StoredEvent<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredEntry<'a> {
    Day(StoredDay<'a>),
    Raw(&'a serde_json::Value),
}

/// All day notes, keyed by absolute day.
///
/// Days with nothing on them are pruned, so the stored document only ever
/// lists days that carry a party log or at least one event. Entries that
/// cannot be read (a key that is not a day, a day of the wrong shape, an
/// event missing fields) are kept verbatim and saved back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    days: BTreeMap<u64, DayNotes>,
    unrecognised: BTreeMap<String, serde_json::Value>,
}

impl NoteBook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a notebook from a JSON object keyed by absolute day.
    ///
    /// Non-numeric keys, malformed days and malformed events are kept aside
    /// with a warning and written back unchanged by [`NoteBook::save`].
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Parse`] if the document is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, EventError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| EventError::Parse {
                reason: e.to_string(),
            })?;

        let mut book = Self::new();
        for (key, value) in raw {
            let Ok(day) = key.trim().parse::<u64>() else {
                warn!(key = %key, "keeping notes entry unchanged: key is not a day number");
                book.unrecognised.insert(key, value);
                continue;
            };
            let raw_day = match serde_json::from_value::<RawDay>(value.clone()) {
                Ok(raw_day) => raw_day,
                Err(e) => {
                    warn!(day, error = %e, "keeping malformed day notes unchanged");
                    book.unrecognised.insert(key, value);
                    continue;
                }
            };
            let mut notes = DayNotes {
                party: raw_day.party,
                ..DayNotes::default()
            };
            for value in raw_day.events {
                match serde_json::from_value::<Event>(value.clone()) {
                    Ok(event) => notes.events.push(event),
                    Err(e) => {
                        warn!(day, error = %e, "keeping malformed event unchanged");
                        notes.unrecognised.push(value);
                    }
                }
            }
            if !notes.is_empty() {
                book.days.insert(day, notes);
            }
        }
        debug!(
            n = book.days.len(),
            unrecognised = book.unrecognised.len(),
            "notebook parsed"
        );
        Ok(book)
    }

    /// Serialises the notebook as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Serialize`] if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, EventError> {
        let mut stored: BTreeMap<String, StoredEntry<'_>> = self
            .unrecognised
            .iter()
            .map(|(key, value)| (key.clone(), StoredEntry::Raw(value)))
            .collect();
        for (day, notes) in &self.days {
            let events = notes
                .events
                .iter()
                .map(StoredEvent::Known)
                .chain(notes.unrecognised.iter().map(StoredEvent::Raw))
                .collect();
            stored.insert(
                day.to_string(),
                StoredEntry::Day(StoredDay {
                    party: &notes.party,
                    events,
                }),
            );
        }
        serde_json::to_string_pretty(&stored).map_err(|e| EventError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Reads a notebook file.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Read`] if the file cannot be read and
    /// [`EventError::Parse`] if it is not a JSON object.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| EventError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let book = Self::from_json_str(&json)?;
        info!(days = book.days.len(), "loaded notes");
        Ok(book)
    }

    /// Reads a notebook file, treating a missing file as an empty notebook.
    ///
    /// # Errors
    ///
    /// Same as [`NoteBook::load`] for a file that exists.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(EventError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no notes file, starting empty");
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Writes the notebook to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Serialize`] if the notebook cannot be encoded
    /// and [`EventError::Write`] if the file cannot be written.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EventError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| EventError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| EventError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(days = self.days.len(), "saved notes");
        Ok(())
    }

    /// Returns the number of days with notes.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no day has notes and nothing unreadable was kept.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.unrecognised.is_empty()
    }

    /// Returns the notes for `day`, if any.
    pub fn day(&self, day: u64) -> Option<&DayNotes> {
        self.days.get(&day)
    }

    /// Returns the party log for `day`, or `""`.
    pub fn party(&self, day: u64) -> &str {
        self.days.get(&day).map_or("", |n| n.party.as_str())
    }

    /// Replaces the party log for `day`; an empty log on a day without events
    /// removes the day.
    pub fn set_party(&mut self, day: u64, text: impl Into<String>) {
        self.days.entry(day).or_default().party = text.into();
        self.prune(day);
    }

    /// Returns the events created on `day`.
    pub fn events_on(&self, day: u64) -> &[Event] {
        self.days
            .get(&day)
            .map(|n| n.events.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the stored event at `at`.
    pub fn event(&self, at: EventRef) -> Option<&Event> {
        self.days.get(&at.day)?.events.get(at.index)
    }

    /// Stores `event` under `day` and returns its reference.
    pub fn add_event(&mut self, day: u64, event: Event) -> EventRef {
        let events = &mut self.days.entry(day).or_default().events;
        events.push(event);
        EventRef {
            day,
            index: events.len() - 1,
        }
    }

    /// Renames and re-describes an event; the rule and anchor are kept.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyName`] for a blank name and
    /// [`EventError::NotFound`] if `at` does not exist.
    pub fn edit_event(&mut self, at: EventRef, name: &str, desc: &str) -> Result<(), EventError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EventError::EmptyName);
        }
        let event = self
            .days
            .get_mut(&at.day)
            .and_then(|n| n.events.get_mut(at.index))
            .ok_or(EventError::NotFound {
                day: at.day,
                index: at.index,
            })?;
        event.name = name.to_string();
        event.desc = desc.trim().to_string();
        Ok(())
    }

    /// Removes and returns an event, pruning the day if it is left empty.
    ///
    /// Later events on the same day shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotFound`] if `at` does not exist.
    pub fn remove_event(&mut self, at: EventRef) -> Result<Event, EventError> {
        let notes = self
            .days
            .get_mut(&at.day)
            .filter(|n| at.index < n.events.len())
            .ok_or(EventError::NotFound {
                day: at.day,
                index: at.index,
            })?;
        let event = notes.events.remove(at.index);
        self.prune(at.day);
        Ok(event)
    }

    /// Iterates over every stored event in day order.
    pub fn iter_events(&self) -> impl Iterator<Item = (EventRef, &Event)> {
        self.days.iter().flat_map(|(&day, notes)| {
            notes
                .events
                .iter()
                .enumerate()
                .map(move |(index, event)| (EventRef { day, index }, event))
        })
    }

    /// Returns every event, from any day, that occurs on `day`.
    pub fn active_events(&self, day: u64) -> Vec<(EventRef, &Event)> {
        let date = decompose(day);
        self.iter_events()
            .filter(|(_, event)| event.matches(date))
            .collect()
    }

    fn prune(&mut self, day: u64) {
        if self.days.get(&day).is_some_and(DayNotes::is_empty) {
            self.days.remove(&day);
        }
    }
}
