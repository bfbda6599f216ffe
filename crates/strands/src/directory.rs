//! Strand directory keyed by strand number.

use std::collections::BTreeMap;
use std::path::Path;

use strandwheel_calendar::Strand;
use tracing::{debug, info, warn};

use crate::entry::StrandEntry;
use crate::error::StrandError;

/// Label shown for strands that are absent, unnamed or hidden.
pub const NO_STRAND: &str = "No Strand";

/// Text shown when a strand has nothing to reveal.
pub const NO_EFFECTS: &str = "No Effects.";

/// Read-only mapping from strand to its descriptive entry.
///
/// A directory is built once and replaced wholesale on reload; entries are
/// never edited in place. An empty directory is valid and renders every
/// strand as [`NO_STRAND`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrandDirectory {
    entries: BTreeMap<Strand, StrandEntry>,
}

impl StrandDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a directory from a JSON object keyed by 1-based strand number.
    ///
    /// Keys that are not strand numbers and values that do not parse as a
    /// [`StrandEntry`] are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Parse`] if the document is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, StrandError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| StrandError::Parse {
                reason: e.to_string(),
            })?;

        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            let Some(strand) = key
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|n| Strand::from_number(n).ok())
            else {
                warn!(key = %key, "skipping strand entry: key is not a strand number");
                continue;
            };
            match serde_json::from_value::<StrandEntry>(value) {
                Ok(entry) => {
                    entries.insert(strand, entry);
                }
                Err(e) => warn!(key = %key, error = %e, "skipping malformed strand entry"),
            }
        }
        debug!(n = entries.len(), "strand directory parsed");
        Ok(Self { entries })
    }

    /// Reads and parses a directory file.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Read`] if the file cannot be read and
    /// [`StrandError::Parse`] if it is not a JSON object.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StrandError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StrandError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_str(&json)?;
        info!(n = directory.len(), "strand directory loaded");
        Ok(directory)
    }

    /// Reads a directory file, falling back to an empty directory on any
    /// failure.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(directory) => directory,
            Err(e) => {
                warn!(error = %e, "using empty strand directory");
                Self::new()
            }
        }
    }

    /// Replaces this directory with the contents of `path`.
    ///
    /// On failure the current contents are kept.
    ///
    /// # Errors
    ///
    /// Propagates the [`StrandError`] from [`StrandDirectory::load`].
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<(), StrandError> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw entry for `strand`, hidden or not.
    pub fn get(&self, strand: Strand) -> Option<&StrandEntry> {
        self.entries.get(&strand)
    }

    /// Iterates entries in strand order.
    pub fn iter(&self) -> impl Iterator<Item = (Strand, &StrandEntry)> {
        self.entries.iter().map(|(s, e)| (*s, e))
    }

    /// Returns the label players see for `strand`.
    pub fn display_name(&self, strand: Strand) -> &str {
        self.get(strand)
            .and_then(StrandEntry::visible_name)
            .unwrap_or(NO_STRAND)
    }

    /// Returns the `(outer, inner)` colours for `strand`, if both are set.
    pub fn colors(&self, strand: Strand) -> Option<(&str, &str)> {
        self.get(strand).and_then(StrandEntry::colors)
    }

    /// Returns the multi-line effect summary for `strand`.
    ///
    /// Absent, hidden and entirely blank entries yield [`NO_EFFECTS`].
    pub fn effect_text(&self, strand: Strand) -> String {
        let Some(entry) = self.get(strand).filter(|e| !e.hidden && !e.is_blank()) else {
            return NO_EFFECTS.to_string();
        };
        let or_dash = |s: &str| {
            let s = s.trim();
            if s.is_empty() { "—".to_string() } else { s.to_string() }
        };
        let name = entry.name.trim();
        format!(
            "Name: {}\nDescription: {}\nLow_Effect: {}\nMid_Effect: {}\nHigh_Effect: {}",
            if name.is_empty() { "Unnamed Strand" } else { name },
            or_dash(&entry.description),
            or_dash(&entry.low_effect),
            or_dash(&entry.mid_effect),
            or_dash(&entry.high_effect),
        )
    }
}

impl FromIterator<(Strand, StrandEntry)> for StrandDirectory {
    fn from_iter<I: IntoIterator<Item = (Strand, StrandEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
