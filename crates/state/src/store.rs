//! Persistence of the day and hour counters.
//!
//! A [`Store`] holds two integers under fixed keys. [`FileStore`] keeps one
//! text file per key, [`MemoryStore`] keeps them in a map, and
//! [`FallbackStore`] chains two stores so that a missing or broken primary
//! medium degrades to the secondary.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StateError;

/// Default file name for the day counter.
pub const DEFAULT_DATE_FILE: &str = "current_date.txt";

/// Default file name for the hour counter.
pub const DEFAULT_HOUR_FILE: &str = "current_hour.txt";

/// Default file name for the day shown before the last day change.
pub const DEFAULT_PREVIOUS_FILE: &str = "previous_date.txt";

/// Default file name for the accumulated hub rotation.
pub const DEFAULT_HUB_FILE: &str = "hub_rotation.txt";

/// The persisted values.
///
/// `Day` and `Hour` are the calendar state proper. `PreviousDay` and
/// `HubRotation` only carry animation context between runs and are never
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Day,
    Hour,
    PreviousDay,
    HubRotation,
}

impl StateKey {
    /// Returns a short lowercase name for messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::PreviousDay => "previous day",
            Self::HubRotation => "hub rotation",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage medium for the day and hour counters.
pub trait Store {
    /// Reads `key`; `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the medium is unreadable or holds a value
    /// that is not an integer.
    fn load(&self, key: StateKey) -> Result<Option<i64>, StateError>;

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the medium cannot be written.
    fn save(&mut self, key: StateKey, value: i64) -> Result<(), StateError>;
}

impl<T: Store + ?Sized> Store for Box<T> {
    fn load(&self, key: StateKey) -> Result<Option<i64>, StateError> {
        (**self).load(key)
    }

    fn save(&mut self, key: StateKey, value: i64) -> Result<(), StateError> {
        (**self).save(key, value)
    }
}

/// One plain-text file per key inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    dir: PathBuf,
    date_file: String,
    hour_file: String,
    previous_file: String,
    hub_file: String,
}

impl FileStore {
    /// Creates a store in `dir` with the default file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            date_file: DEFAULT_DATE_FILE.to_string(),
            hour_file: DEFAULT_HOUR_FILE.to_string(),
            previous_file: DEFAULT_PREVIOUS_FILE.to_string(),
            hub_file: DEFAULT_HUB_FILE.to_string(),
        }
    }

    /// Sets the day counter's file name.
    pub fn with_date_file(mut self, name: impl Into<String>) -> Self {
        self.date_file = name.into();
        self
    }

    /// Sets the hour counter's file name.
    pub fn with_hour_file(mut self, name: impl Into<String>) -> Self {
        self.hour_file = name.into();
        self
    }

    /// Sets the previous-day file name.
    pub fn with_previous_file(mut self, name: impl Into<String>) -> Self {
        self.previous_file = name.into();
        self
    }

    /// Sets the hub rotation file name.
    pub fn with_hub_file(mut self, name: impl Into<String>) -> Self {
        self.hub_file = name.into();
        self
    }

    /// Returns the directory holding the files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the full path for `key`.
    pub fn path(&self, key: StateKey) -> PathBuf {
        let name = match key {
            StateKey::Day => &self.date_file,
            StateKey::Hour => &self.hour_file,
            StateKey::PreviousDay => &self.previous_file,
            StateKey::HubRotation => &self.hub_file,
        };
        self.dir.join(name)
    }
}

impl Store for FileStore {
    fn load(&self, key: StateKey) -> Result<Option<i64>, StateError> {
        let path = self.path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StateError::Io { path, source }),
        };
        let trimmed = text.trim();
        trimmed
            .parse::<i64>()
            .map(Some)
            .map_err(|_| StateError::Corrupt {
                key,
                value: trimmed.to_string(),
            })
    }

    fn save(&mut self, key: StateKey, value: i64) -> Result<(), StateError> {
        fs::create_dir_all(&self.dir).map_err(|source| StateError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path(key);
        fs::write(&path, value.to_string()).map_err(|source| StateError::Io { path, source })?;
        debug!(%key, value, "saved state file");
        Ok(())
    }
}

/// In-process store, mainly for tests and as a last-resort secondary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<StateKey, i64>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with a day and hour.
    pub fn with_values(day: i64, hour: i64) -> Self {
        let mut values = HashMap::new();
        values.insert(StateKey::Day, day);
        values.insert(StateKey::Hour, hour);
        Self { values }
    }

    /// Returns the raw stored value for `key`.
    pub fn get(&self, key: StateKey) -> Option<i64> {
        self.values.get(&key).copied()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: StateKey) -> Result<Option<i64>, StateError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: StateKey, value: i64) -> Result<(), StateError> {
        self.values.insert(key, value);
        Ok(())
    }
}

/// Tries `primary` first and falls back to `secondary`.
///
/// Reads fall back when the primary errors or has no value. Writes go to the
/// primary only, and reach the secondary only when the primary write fails.
#[derive(Debug, Clone, Default)]
pub struct FallbackStore<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Store, S: Store> FallbackStore<P, S> {
    /// Chains two stores.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Returns the primary store.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the secondary store.
    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: Store, S: Store> Store for FallbackStore<P, S> {
    fn load(&self, key: StateKey) -> Result<Option<i64>, StateError> {
        match self.primary.load(key) {
            Ok(Some(value)) => return Ok(Some(value)),
            Ok(None) => debug!(%key, "primary store empty, trying secondary"),
            Err(e) => debug!(%key, error = %e, "primary store failed, trying secondary"),
        }
        self.secondary.load(key)
    }

    fn save(&mut self, key: StateKey, value: i64) -> Result<(), StateError> {
        match self.primary.save(key, value) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(%key, error = %e, "primary store write failed, using secondary");
                self.secondary.save(key, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that refuses every operation.
    struct BrokenStore;

    impl Store for BrokenStore {
        fn load(&self, key: StateKey) -> Result<Option<i64>, StateError> {
            Err(StateError::Corrupt {
                key,
                value: "broken".to_string(),
            })
        }

        fn save(&mut self, key: StateKey, _value: i64) -> Result<(), StateError> {
            Err(StateError::Corrupt {
                key,
                value: "broken".to_string(),
            })
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(StateKey::Day).unwrap(), None);
        store.save(StateKey::Day, 42).unwrap();
        assert_eq!(store.load(StateKey::Day).unwrap(), Some(42));
        assert_eq!(store.load(StateKey::Hour).unwrap(), None);
    }

    #[test]
    fn file_store_paths() {
        let store = FileStore::new("/tmp/wheel").with_hour_file("hour.txt");
        assert_eq!(store.path(StateKey::Day), Path::new("/tmp/wheel/current_date.txt"));
        assert_eq!(store.path(StateKey::Hour), Path::new("/tmp/wheel/hour.txt"));
        assert_eq!(
            store.path(StateKey::HubRotation),
            Path::new("/tmp/wheel/hub_rotation.txt")
        );
    }

    #[test]
    fn fallback_reads_secondary_when_primary_empty() {
        let store = FallbackStore::new(MemoryStore::new(), MemoryStore::with_values(9, 4));
        assert_eq!(store.load(StateKey::Day).unwrap(), Some(9));
    }

    #[test]
    fn fallback_prefers_primary() {
        let store = FallbackStore::new(
            MemoryStore::with_values(1, 2),
            MemoryStore::with_values(9, 4),
        );
        assert_eq!(store.load(StateKey::Hour).unwrap(), Some(2));
    }

    #[test]
    fn fallback_reads_secondary_when_primary_errors() {
        let store = FallbackStore::new(BrokenStore, MemoryStore::with_values(7, 3));
        assert_eq!(store.load(StateKey::Day).unwrap(), Some(7));
    }

    #[test]
    fn fallback_writes_primary_only_when_it_works() {
        let mut store = FallbackStore::new(MemoryStore::new(), MemoryStore::new());
        store.save(StateKey::Day, 5).unwrap();
        assert_eq!(store.primary().get(StateKey::Day), Some(5));
        assert_eq!(store.secondary().get(StateKey::Day), None);
    }

    #[test]
    fn fallback_writes_secondary_when_primary_fails() {
        let mut store = FallbackStore::new(BrokenStore, MemoryStore::new());
        store.save(StateKey::Hour, 11).unwrap();
        assert_eq!(store.secondary().get(StateKey::Hour), Some(11));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn Store> = Box::new(MemoryStore::new());
        store.save(StateKey::Hour, 6).unwrap();
        assert_eq!(store.load(StateKey::Hour).unwrap(), Some(6));
    }

    #[test]
    fn state_key_display() {
        assert_eq!(StateKey::Day.to_string(), "day");
        assert_eq!(StateKey::Hour.to_string(), "hour");
        assert_eq!(StateKey::PreviousDay.to_string(), "previous day");
    }
}
