//! A single strand directory entry.

use serde::{Deserialize, Deserializer, Serialize};
use strandwheel_calendar::MagicPhase;

/// Descriptive data for one strand.
///
/// Every field is optional in the source document. Field names are accepted
/// both in the capitalised form written by the desktop tool (`Name`,
/// `Hidden`, `Low_Effect`, ...) and in snake case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrandEntry {
    /// Display name; empty means unnamed.
    #[serde(alias = "Name")]
    pub name: String,

    /// Whether the strand is concealed from players.
    #[serde(alias = "Hidden", deserialize_with = "deserialize_hidden")]
    pub hidden: bool,

    /// Outer gradient stop colour.
    #[serde(alias = "outer")]
    pub outer_color: Option<String>,

    /// Inner gradient stop colour.
    #[serde(alias = "inner")]
    pub inner_color: Option<String>,

    #[serde(alias = "Description")]
    pub description: String,

    #[serde(alias = "Low_Effect")]
    pub low_effect: String,

    #[serde(alias = "Mid_Effect")]
    pub mid_effect: String,

    #[serde(alias = "High_Effect")]
    pub high_effect: String,
}

/// The hidden flag appears as `"yes"`/`"no"` text or as a JSON boolean.
#[derive(Deserialize)]
#[serde(untagged)]
enum HiddenFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_hidden<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<HiddenFlag>::deserialize(deserializer)? {
        Some(HiddenFlag::Bool(b)) => b,
        Some(HiddenFlag::Text(s)) => s.trim().eq_ignore_ascii_case("yes"),
        None => false,
    })
}

impl StrandEntry {
    /// Returns the trimmed name if the strand may be shown to players.
    pub fn visible_name(&self) -> Option<&str> {
        let name = self.name.trim();
        if self.hidden || name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Returns the `(outer, inner)` gradient colours when both are present.
    pub fn colors(&self) -> Option<(&str, &str)> {
        match (&self.outer_color, &self.inner_color) {
            (Some(outer), Some(inner)) if !outer.is_empty() && !inner.is_empty() => {
                Some((outer.as_str(), inner.as_str()))
            }
            _ => None,
        }
    }

    /// Returns the effect text for a magic phase.
    pub fn effect(&self, phase: MagicPhase) -> &str {
        match phase {
            MagicPhase::Low => &self.low_effect,
            MagicPhase::Mid => &self.mid_effect,
            MagicPhase::High => &self.high_effect,
        }
    }

    /// Returns `true` if no descriptive field carries any text.
    pub fn is_blank(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.low_effect,
            &self.mid_effect,
            &self.high_effect,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}
