use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Strandwheel configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StrandwheelConfig {
    /// Where the day and hour counters live.
    #[serde(default)]
    pub storage: StorageToml,

    /// Strand directory settings.
    #[serde(default)]
    pub strands: StrandsToml,

    /// Day-notes settings.
    #[serde(default)]
    pub notes: NotesToml,

    /// Dial layout settings.
    #[serde(default)]
    pub layout: LayoutToml,
}

impl StrandwheelConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageToml {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_date_file")]
    pub date_file: String,
    #[serde(default = "default_hour_file")]
    pub hour_file: String,
    /// Day shown before the last day change, for the strand slide.
    #[serde(default = "default_previous_file")]
    pub previous_file: String,
    /// Accumulated hub rotation, so the hub keeps turning across runs.
    #[serde(default = "default_hub_file")]
    pub hub_file: String,
    /// Secondary directory used when the primary one cannot be read or written.
    #[serde(default)]
    pub fallback_dir: Option<PathBuf>,
}

impl Default for StorageToml {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            date_file: default_date_file(),
            hour_file: default_hour_file(),
            previous_file: default_previous_file(),
            hub_file: default_hub_file(),
            fallback_dir: None,
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_date_file() -> String {
    strandwheel_state::DEFAULT_DATE_FILE.to_string()
}
fn default_hour_file() -> String {
    strandwheel_state::DEFAULT_HOUR_FILE.to_string()
}
fn default_previous_file() -> String {
    strandwheel_state::DEFAULT_PREVIOUS_FILE.to_string()
}
fn default_hub_file() -> String {
    strandwheel_state::DEFAULT_HUB_FILE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrandsToml {
    #[serde(default = "default_strands_path")]
    pub path: PathBuf,
}

impl Default for StrandsToml {
    fn default() -> Self {
        Self {
            path: default_strands_path(),
        }
    }
}

fn default_strands_path() -> PathBuf {
    PathBuf::from("strands.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesToml {
    #[serde(default = "default_notes_path")]
    pub path: PathBuf,
}

impl Default for NotesToml {
    fn default() -> Self {
        Self {
            path: default_notes_path(),
        }
    }
}

fn default_notes_path() -> PathBuf {
    PathBuf::from("day_notes.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_ring_gap")]
    pub ring_gap: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_pointer_angle")]
    pub pointer_angle: f64,
    #[serde(default = "default_strand_window")]
    pub strand_window: usize,
    #[serde(default = "default_year_window")]
    pub year_window: usize,
    /// Absent means the day ring shows the whole month.
    #[serde(default)]
    pub day_window: Option<usize>,
    #[serde(default = "default_window_span")]
    pub window_span: f64,
    #[serde(default = "default_pointer_size")]
    pub pointer_size: f64,
    #[serde(default)]
    pub pointer_offset: PointerOffsetToml,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            size: default_size(),
            ring_gap: default_ring_gap(),
            margin: default_margin(),
            pointer_angle: default_pointer_angle(),
            strand_window: default_strand_window(),
            year_window: default_year_window(),
            day_window: None,
            window_span: default_window_span(),
            pointer_size: default_pointer_size(),
            pointer_offset: PointerOffsetToml::default(),
        }
    }
}

fn default_size() -> f64 {
    720.0
}
fn default_ring_gap() -> f64 {
    34.0
}
fn default_margin() -> f64 {
    50.0
}
fn default_pointer_angle() -> f64 {
    270.0
}
fn default_strand_window() -> usize {
    15
}
fn default_year_window() -> usize {
    7
}
fn default_window_span() -> f64 {
    180.0
}
fn default_pointer_size() -> f64 {
    4.0
}

/// Radial pointer offset per ring, relative to the ring's centre line.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointerOffsetToml {
    #[serde(default = "default_pointer_offset")]
    pub day: f64,
    #[serde(default = "default_pointer_offset")]
    pub strand: f64,
    #[serde(default = "default_pointer_offset")]
    pub month: f64,
    #[serde(default = "default_pointer_offset")]
    pub magic: f64,
    #[serde(default = "default_pointer_offset")]
    pub season: f64,
    #[serde(default = "default_pointer_offset")]
    pub year: f64,
}

impl Default for PointerOffsetToml {
    fn default() -> Self {
        Self {
            day: default_pointer_offset(),
            strand: default_pointer_offset(),
            month: default_pointer_offset(),
            magic: default_pointer_offset(),
            season: default_pointer_offset(),
            year: default_pointer_offset(),
        }
    }
}

fn default_pointer_offset() -> f64 {
    -4.5
}
