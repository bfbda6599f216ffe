//! The day/hour controller.

use strandwheel_calendar::{CalendarDate, decompose};

use crate::jump::ManualJump;

/// Hours in one day.
pub const HOURS_PER_DAY: u8 = 24;

/// Hub rotation per hour step, in degrees.
pub const DEGREES_PER_HOUR: i64 = 15;

/// Which parts of the state an operation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChange {
    pub day_changed: bool,
    pub hour_changed: bool,
}

impl StateChange {
    /// Returns `true` if anything changed.
    pub fn any(self) -> bool {
        self.day_changed || self.hour_changed
    }
}

/// Owner of the absolute day and the hour of day.
///
/// The day never goes below zero: decrements past the epoch saturate. The
/// hub rotation accumulates ±15° per hour step without wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    absolute_day: u64,
    hour: u8,
    hub_rotation: i64,
}

impl Controller {
    /// Creates a controller; `hour` is reduced modulo 24 and the hub starts at
    /// its resting angle for that hour.
    pub fn new(absolute_day: u64, hour: u8) -> Self {
        let hour = hour % HOURS_PER_DAY;
        Self {
            absolute_day,
            hour,
            hub_rotation: i64::from(hour) * DEGREES_PER_HOUR,
        }
    }

    /// Creates a controller with a previously accumulated hub rotation.
    ///
    /// A rotation that does not rest on `hour` (modulo a full turn) is stale
    /// and is replaced by the resting angle for `hour`.
    pub fn with_hub_rotation(absolute_day: u64, hour: u8, hub_rotation: i64) -> Self {
        let mut controller = Self::new(absolute_day, hour);
        if hub_rotation.rem_euclid(360) == controller.hub_rotation {
            controller.hub_rotation = hub_rotation;
        }
        controller
    }

    /// Returns the absolute day.
    pub fn absolute_day(&self) -> u64 {
        self.absolute_day
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the accumulated hub rotation in degrees.
    pub fn hub_rotation(&self) -> f64 {
        self.hub_rotation as f64
    }

    /// Returns the accumulated hub rotation in whole degrees.
    pub fn hub_degrees(&self) -> i64 {
        self.hub_rotation
    }

    /// Decomposes the current absolute day.
    pub fn date(&self) -> CalendarDate {
        decompose(self.absolute_day)
    }

    /// Moves the day by `delta`, stopping at day 0.
    pub fn bump_day(&mut self, delta: i64) -> StateChange {
        let before = self.absolute_day;
        self.absolute_day = before.saturating_add_signed(delta);
        StateChange {
            day_changed: self.absolute_day != before,
            hour_changed: false,
        }
    }

    /// Moves the hour by `delta`, wrapping within the day.
    ///
    /// The day rolls only on the exact wrap edges: 23 → 0 advances it and
    /// 0 → 23 rewinds it. Larger jumps that happen to cross midnight leave
    /// the day alone.
    pub fn bump_hour(&mut self, delta: i64) -> StateChange {
        let before = self.hour;
        let after = (i64::from(before) + delta).rem_euclid(i64::from(HOURS_PER_DAY)) as u8;
        self.hour = after;
        self.hub_rotation = self
            .hub_rotation
            .saturating_add(delta.saturating_mul(DEGREES_PER_HOUR));

        let day_change = match (before, after) {
            (23, 0) => self.bump_day(1),
            (0, 23) => self.bump_day(-1),
            _ => StateChange::default(),
        };
        StateChange {
            day_changed: day_change.day_changed,
            hour_changed: after != before,
        }
    }

    /// Jumps to a clamped manual date, keeping the hour.
    pub fn jump_to(&mut self, target: &ManualJump) -> StateChange {
        let before = self.absolute_day;
        self.absolute_day = target.absolute_day();
        StateChange {
            day_changed: self.absolute_day != before,
            hour_changed: false,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
