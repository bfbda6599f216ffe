//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use strandwheel_events::Recurrence;
use strandwheel_layout::{DialGeometry, LayoutConfig, RingKind};
use strandwheel_state::{FallbackStore, FileStore, Store};

/// Parses a recurrence rule key into the corresponding enum variant.
pub fn parse_recurrence(s: &str) -> Result<Recurrence> {
    match Recurrence::from_key(s.trim().to_lowercase().as_str()) {
        Some(rule) => Ok(rule),
        None => bail!(
            "unknown recurrence rule: {s:?} (expected one of: {})",
            Recurrence::ALL.map(|r| r.key()).join(", ")
        ),
    }
}

/// Builds a [`LayoutConfig`] from the TOML layout configuration.
pub fn build_layout_config(layout: &LayoutToml) -> Result<LayoutConfig> {
    let geometry = DialGeometry {
        size: layout.size,
        ring_gap: layout.ring_gap,
        margin: layout.margin,
    };
    let offsets = &layout.pointer_offset;
    let cfg = LayoutConfig::new()
        .with_geometry(geometry)
        .with_pointer_angle(layout.pointer_angle)
        .with_strand_window(layout.strand_window)
        .with_year_window(layout.year_window)
        .with_day_window(layout.day_window)
        .with_window_span(layout.window_span)
        .with_pointer_size(layout.pointer_size)
        .with_pointer_offset(RingKind::Day, offsets.day)
        .with_pointer_offset(RingKind::Strand, offsets.strand)
        .with_pointer_offset(RingKind::Month, offsets.month)
        .with_pointer_offset(RingKind::Magic, offsets.magic)
        .with_pointer_offset(RingKind::Season, offsets.season)
        .with_pointer_offset(RingKind::Year, offsets.year);
    cfg.validate().context("invalid [layout] configuration")?;
    Ok(cfg)
}

/// Builds the state store from the TOML storage configuration.
///
/// With a `fallback_dir` the primary directory is tried first for every read
/// and write.
pub fn build_store(storage: &StorageToml) -> Box<dyn Store> {
    let file_store = |dir: std::path::PathBuf| {
        FileStore::new(dir)
            .with_date_file(&storage.date_file)
            .with_hour_file(&storage.hour_file)
            .with_previous_file(&storage.previous_file)
            .with_hub_file(&storage.hub_file)
    };
    let primary = file_store(storage.dir.clone());
    match &storage.fallback_dir {
        Some(dir) => Box::new(FallbackStore::new(primary, file_store(dir.clone()))),
        None => Box::new(primary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strandwheel_state::StateKey;

    #[test]
    fn recurrence_keys_parse() {
        assert_eq!(parse_recurrence("one").unwrap(), Recurrence::Once);
        assert_eq!(parse_recurrence(" Strand+Mag ").unwrap(), Recurrence::StrandMagic);
        let err = parse_recurrence("weekly").unwrap_err();
        assert!(err.to_string().contains("strand+both"));
    }

    #[test]
    fn default_layout_is_valid() {
        let cfg = build_layout_config(&LayoutToml::default()).unwrap();
        assert_eq!(cfg.strand_window(), 15);
        assert_eq!(cfg.pointer_offset(RingKind::Season), -4.5);
    }

    #[test]
    fn even_window_is_rejected() {
        let layout = LayoutToml {
            strand_window: 14,
            ..LayoutToml::default()
        };
        let err = build_layout_config(&layout).unwrap_err();
        assert!(format!("{err:#}").contains("[layout]"));
    }

    #[test]
    fn store_uses_configured_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageToml {
            dir: dir.path().to_path_buf(),
            date_file: "day.txt".to_string(),
            ..StorageToml::default()
        };
        let mut store = build_store(&storage);
        store.save(StateKey::Day, 12).unwrap();
        assert!(dir.path().join("day.txt").exists());
    }

    #[test]
    fn store_falls_back_to_secondary_directory() {
        let primary = tempfile::tempdir().unwrap();
        let secondary = tempfile::tempdir().unwrap();
        std::fs::write(secondary.path().join("current_hour.txt"), "9").unwrap();
        let storage = StorageToml {
            dir: primary.path().to_path_buf(),
            fallback_dir: Some(secondary.path().to_path_buf()),
            ..StorageToml::default()
        };
        let store = build_store(&storage);
        assert_eq!(store.load(StateKey::Hour).unwrap(), Some(9));
    }
}
