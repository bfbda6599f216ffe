//! Whole-dial layout: every ring, every pointer and the hub.

use serde::Serialize;
use strandwheel_calendar::{
    CalendarDate, MONTH_NAMES, MagicPhase, STRAND_COUNT, Season, Strand, is_leap_year,
};
use strandwheel_strands::StrandDirectory;
use tracing::debug;

use crate::angle::shortest_cycle_delta;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::DialGeometry;
use crate::ring::{Fill, Pointer, Ring, RingKind, SlotContent};
use crate::window::{cyclic_window, linear_window, month_day_window};

/// Hour-of-day rotation of the hub per hour step.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Discrete state the dial is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialState {
    pub date: CalendarDate,
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Accumulated hub rotation in degrees; not wrapped, so a renderer can
    /// animate continuously through midnight.
    pub hub_rotation: f64,
    /// Strand shown by the previous layout, if any, for the slide animation.
    pub previous_strand: Option<Strand>,
}

impl DialState {
    /// Creates a state with the hub at its resting angle for `hour` and no
    /// previous strand.
    pub fn new(date: CalendarDate, hour: u8) -> Self {
        Self {
            date,
            hour,
            hub_rotation: f64::from(hour) * DEGREES_PER_HOUR,
            previous_strand: None,
        }
    }
}

/// The rotating sun/moon hub at the dial centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hub {
    pub radius: f64,
    pub rotation: f64,
    pub hour: u8,
    /// Clock text, e.g. `"07:00"`.
    pub time_label: String,
}

/// Complete rendering contract for one frame of the dial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialLayout {
    pub geometry: DialGeometry,
    /// Rings from the outside in.
    pub rings: Vec<Ring>,
    /// One pointer per ring, in ring order.
    pub pointers: Vec<Pointer>,
    pub hub: Hub,
    /// Rotation the strand ring starts from when animating to its resting
    /// rotation of zero.
    pub strand_transition_start: f64,
}

impl DialLayout {
    /// Returns the layout of `kind`.
    pub fn ring(&self, kind: RingKind) -> Option<&Ring> {
        self.rings.iter().find(|r| r.kind == kind)
    }
}

/// Lays out the whole dial.
///
/// # Errors
///
/// Returns [`LayoutError`] if `config` fails validation.
#[tracing::instrument(skip_all, fields(day = state.date.absolute_day(), hour = state.hour))]
pub fn layout_dial(
    state: &DialState,
    directory: &StrandDirectory,
    config: &LayoutConfig,
) -> Result<DialLayout, LayoutError> {
    config.validate()?;
    let date = state.date;

    let rings = vec![
        day_ring(&date, config),
        strand_ring(&date, directory, config),
        month_ring(&date, config),
        magic_ring(&date, config),
        season_ring(&date, config),
        year_ring(&date, config),
    ];
    let strand_transition_start =
        strand_transition_start(state.previous_strand, date.strand(), config);
    debug!(
        strand = date.strand().number(),
        strand_transition_start, "dial laid out"
    );

    Ok(DialLayout {
        geometry: *config.geometry(),
        rings,
        pointers: pointers(config),
        hub: Hub {
            radius: config.geometry().hub_radius(),
            rotation: state.hub_rotation,
            hour: state.hour,
            time_label: format!("{:02}:00", state.hour),
        },
        strand_transition_start,
    })
}

/// Lays out the day ring: the whole month, or a window wrapping within it.
pub fn day_ring(date: &CalendarDate, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Day;
    let month_length = date.days_in_month();
    let leap_month = date.month() == 1 && is_leap_year(date.year());
    let slot = |day: u8| SlotContent {
        leap_day: leap_month && day == 29,
        ..SlotContent::plain(Some(u64::from(day)), day.to_string())
    };

    match config.day_window() {
        None => {
            let slots = (1..=month_length).map(slot).collect();
            Ring::full_cycle(
                kind,
                g.radius(kind),
                g.thickness(),
                slots,
                usize::from(date.day() - 1),
                config.pointer_angle(),
            )
        }
        Some(width) => {
            let slots = month_day_window(date.day(), month_length, width)
                .into_iter()
                .map(slot)
                .collect();
            Ring::windowed(
                kind,
                g.radius(kind),
                g.thickness(),
                slots,
                config.window_step(width),
                config.pointer_angle(),
            )
        }
    }
}

/// Lays out the strand ring as a window centred on the current strand.
///
/// Labels come from `directory`; absent or hidden strands read "No Strand".
pub fn strand_ring(date: &CalendarDate, directory: &StrandDirectory, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Strand;
    let width = config.strand_window();
    let slots = cyclic_window(date.strand().index(), width, STRAND_COUNT)
        .into_iter()
        .map(|index| {
            let strand = Strand::from_index_wrapping(index as i64);
            let fill = match directory.colors(strand) {
                Some((outer, inner)) => Fill::Gradient {
                    outer: outer.to_string(),
                    inner: inner.to_string(),
                },
                None => Fill::None,
            };
            SlotContent::filled(
                u64::from(strand.number()),
                directory.display_name(strand),
                fill,
            )
        })
        .collect();
    Ring::windowed(
        kind,
        g.radius(kind),
        g.thickness(),
        slots,
        config.window_step(width),
        config.pointer_angle(),
    )
}

/// Lays out the month ring with all twelve months.
pub fn month_ring(date: &CalendarDate, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Month;
    let slots = MONTH_NAMES
        .iter()
        .zip(&config.palette().months)
        .enumerate()
        .map(|(i, (name, colors))| SlotContent::filled(i as u64 + 1, *name, colors.into()))
        .collect();
    Ring::full_cycle(
        kind,
        g.radius(kind),
        g.thickness(),
        slots,
        usize::from(date.month()),
        config.pointer_angle(),
    )
}

/// Lays out the magic-phase ring with all three phases.
pub fn magic_ring(date: &CalendarDate, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Magic;
    let slots = MagicPhase::ALL
        .iter()
        .zip(&config.palette().magic_phases)
        .map(|(phase, colors)| {
            SlotContent::filled(phase.index() as u64, phase.name(), colors.into())
        })
        .collect();
    Ring::full_cycle(
        kind,
        g.radius(kind),
        g.thickness(),
        slots,
        date.magic_phase().index(),
        config.pointer_angle(),
    )
}

/// Lays out the season ring with all four seasons.
pub fn season_ring(date: &CalendarDate, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Season;
    let slots = Season::ALL
        .iter()
        .zip(&config.palette().seasons)
        .map(|(season, colors)| {
            SlotContent::filled(season.index() as u64, season.name(), colors.into())
        })
        .collect();
    Ring::full_cycle(
        kind,
        g.radius(kind),
        g.thickness(),
        slots,
        date.season().index(),
        config.pointer_angle(),
    )
}

/// Lays out the year ring as a window centred on the current year.
///
/// Slots before year 0 are kept so the current year stays centred, but carry
/// no value and an empty label.
pub fn year_ring(date: &CalendarDate, config: &LayoutConfig) -> Ring {
    let g = config.geometry();
    let kind = RingKind::Year;
    let width = config.year_window();
    let slots = linear_window(date.year(), width)
        .into_iter()
        .map(|year| match year {
            Some(y) => SlotContent::plain(Some(y), y.to_string()),
            None => SlotContent::plain(None, ""),
        })
        .collect();
    Ring::windowed(
        kind,
        g.radius(kind),
        g.thickness(),
        slots,
        config.window_step(width),
        config.pointer_angle(),
    )
}

/// Places one pointer over each ring.
pub fn pointers(config: &LayoutConfig) -> Vec<Pointer> {
    let g = config.geometry();
    RingKind::ALL
        .iter()
        .map(|&ring| Pointer {
            ring,
            angle: config.pointer_angle(),
            radius: g.radius(ring) - g.thickness() / 2.0 + config.pointer_offset(ring),
            size: config.pointer_size(),
        })
        .collect()
}

/// Returns the rotation the strand ring should start from so the slide from
/// `previous` to `current` takes the short way round.
///
/// The new window is already centred on `current`; starting it turned by
/// `delta * step` puts the previous strand back under the pointer, and the
/// renderer then eases the rotation to zero.
pub fn strand_transition_start(
    previous: Option<Strand>,
    current: Strand,
    config: &LayoutConfig,
) -> f64 {
    let Some(previous) = previous else {
        return 0.0;
    };
    let delta = shortest_cycle_delta(current.index(), previous.index(), STRAND_COUNT);
    delta as f64 * config.window_step(config.strand_window())
}
