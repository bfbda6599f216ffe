use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strandwheel fantasy-calendar dial.
#[derive(Parser)]
#[command(
    name = "strandwheel",
    version,
    about = "Fantasy calendar dial with strands, seasons and magic phases"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file; missing file means defaults.
    #[arg(short, long, global = true, default_value = "strandwheel.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current date, or the full dial layout as JSON.
    Show(ShowArgs),
    /// Move the current day forward or back.
    Day(StepArgs),
    /// Move the current hour forward or back, rolling the day at midnight.
    Hour(StepArgs),
    /// Jump to a specific date.
    Jump(JumpArgs),
    /// Print the current strand's effects.
    Effect,
    /// List upcoming dates with the same strand and magic phase.
    Combo(ComboArgs),
    /// Read or replace the party log for the current day.
    Party(PartyArgs),
    /// Manage recurring events.
    Event(EventArgs),
}

/// Arguments for the `show` subcommand.
///
/// The layout's `strand_transition_start` describes the slide from the strand
/// shown before the most recent day change, and the hub rotation keeps
/// accumulating across runs; both are persisted next to the day and hour.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Print the complete dial layout as JSON instead of the date line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `day` and `hour` subcommands.
#[derive(clap::Args)]
pub struct StepArgs {
    /// Signed number of steps, e.g. `1` or `-7`.
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,

    /// Print the resulting dial layout as JSON instead of the date line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `jump` subcommand.
///
/// Fields are taken as text so out-of-range values can be clamped rather
/// than rejected by the argument parser.
#[derive(clap::Args)]
pub struct JumpArgs {
    #[arg(allow_hyphen_values = true)]
    pub year: String,
    #[arg(allow_hyphen_values = true)]
    pub month: String,
    #[arg(allow_hyphen_values = true)]
    pub day: String,

    /// Print the resulting dial layout as JSON instead of the date line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `combo` subcommand.
#[derive(clap::Args)]
pub struct ComboArgs {
    /// Number of dates to list.
    #[arg(short, default_value_t = 10)]
    pub n: usize,
}

/// Arguments for the `party` subcommand.
#[derive(clap::Args)]
pub struct PartyArgs {
    /// New party log text; an empty string clears it. Omit to print it.
    pub text: Option<String>,
}

/// Arguments for the `event` subcommand.
#[derive(clap::Args)]
pub struct EventArgs {
    #[command(subcommand)]
    pub action: EventAction,
}

/// Event operations. Events are addressed by the day they were created on
/// and their position in that day's list, as printed by `event list`.
#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event anchored on the current date.
    Add {
        name: String,
        /// Free-text description.
        #[arg(short, long, default_value = "")]
        desc: String,
        /// Recurrence: one, yearly, strand, strand+season, strand+mag, strand+both.
        #[arg(short, long, default_value = "one")]
        rule: String,
    },
    /// List events active today, or every stored event with `--all`.
    List {
        #[arg(long)]
        all: bool,
    },
    /// List the next dates an event occurs on.
    Next {
        day: u64,
        index: usize,
        /// Number of dates to list.
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Rename an event and replace its description.
    Edit {
        day: u64,
        index: usize,
        name: String,
        #[arg(short, long, default_value = "")]
        desc: String,
    },
    /// Delete an event.
    Remove { day: u64, index: usize },
}
