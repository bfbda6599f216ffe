//! Shared start-up for every command: config, persisted session and strand
//! directory.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use strandwheel_events::NoteBook;
use strandwheel_layout::{DialLayout, DialState, date_banner, layout_dial};
use strandwheel_state::{Session, Store};
use strandwheel_strands::StrandDirectory;

use crate::config::StrandwheelConfig;
use crate::convert;

/// Everything a command needs, loaded once per invocation.
pub struct App {
    pub config: StrandwheelConfig,
    pub session: Session<Box<dyn Store>>,
    pub directory: StrandDirectory,
}

impl App {
    /// Loads the config at `config_path` and opens the session and directory
    /// it points to.
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = StrandwheelConfig::load(config_path)?;
        let session = Session::open(convert::build_store(&config.storage));
        let directory = StrandDirectory::load_or_empty(&config.strands.path);
        info!(
            day = session.controller().absolute_day(),
            hour = session.hour(),
            strands = directory.len(),
            "session opened"
        );
        Ok(Self {
            config,
            session,
            directory,
        })
    }

    /// Returns the one-line description of the current date and hour.
    pub fn banner(&self) -> String {
        date_banner(&self.session.date(), self.session.hour(), &self.directory)
    }

    /// Returns the state the dial is drawn from.
    pub fn dial_state(&self) -> DialState {
        DialState {
            date: self.session.date(),
            hour: self.session.hour(),
            hub_rotation: self.session.controller().hub_rotation(),
            previous_strand: self.session.previous_strand(),
        }
    }

    /// Lays out the dial for the current state.
    pub fn layout(&self) -> Result<DialLayout> {
        let cfg = convert::build_layout_config(&self.config.layout)?;
        layout_dial(&self.dial_state(), &self.directory, &cfg).context("failed to lay out dial")
    }

    /// Prints the dial layout as pretty JSON.
    pub fn print_layout(&self) -> Result<()> {
        let layout = self.layout()?;
        let json = serde_json::to_string_pretty(&layout).context("failed to serialise layout")?;
        println!("{json}");
        Ok(())
    }

    /// Loads the day notes; a missing file is an empty notebook.
    ///
    /// A file that exists but cannot be read or parsed is an error, so it is
    /// never overwritten by a later save.
    pub fn notebook(&self) -> Result<NoteBook> {
        let path = &self.config.notes.path;
        NoteBook::load_if_exists(path).with_context(|| {
            format!(
                "refusing to touch notes file {}; fix or move it first",
                path.display()
            )
        })
    }

    /// Writes the day notes back.
    pub fn save_notebook(&self, book: &NoteBook) -> Result<()> {
        book.save(&self.config.notes.path).with_context(|| {
            format!(
                "failed to save notes: {}",
                self.config.notes.path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write_config(dir: &Path) -> PathBuf {
        let config = dir.join("strandwheel.toml");
        let toml = format!(
            "[storage]\ndir = '{}'\n\n[strands]\npath = '{}'\n\n[notes]\npath = '{}'\n",
            dir.join("state").display(),
            dir.join("strands.json").display(),
            dir.join("day_notes.json").display(),
        );
        fs::write(&config, toml).unwrap();
        config
    }

    #[test]
    fn strand_transition_reaches_a_later_show() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());

        let mut app = App::open(&config).unwrap();
        app.session.bump_day(6);
        assert_eq!(app.layout().unwrap().strand_transition_start, 0.0);
        app.session.bump_day(1);
        drop(app);

        // A fresh process sees the strand 1 -> 2 slide: one slot of 180 / 15.
        let app = App::open(&config).unwrap();
        let layout = app.layout().unwrap();
        assert_eq!(app.session.date().strand().number(), 2);
        assert_eq!(layout.strand_transition_start, 12.0);
    }

    #[test]
    fn hub_rotation_carries_over_midnight() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());

        let mut app = App::open(&config).unwrap();
        for _ in 0..24 {
            app.session.bump_hour(1);
        }
        drop(app);

        let app = App::open(&config).unwrap();
        assert_eq!(app.session.hour(), 0);
        assert_eq!(app.layout().unwrap().hub.rotation, 360.0);
    }

    #[test]
    fn malformed_notes_file_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());
        fs::write(dir.path().join("day_notes.json"), "{\"5\": {\"party\": \"Slew\"},}").unwrap();

        let app = App::open(&config).unwrap();
        let err = app.notebook().unwrap_err();
        assert!(format!("{err:#}").contains("refusing to touch notes file"));
    }

    #[test]
    fn missing_notes_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::open(&write_config(dir.path())).unwrap();
        assert!(app.notebook().unwrap().is_empty());
    }
}
