//! A controller bound to a store.

use strandwheel_calendar::{CalendarDate, Strand, decompose};
use tracing::{debug, warn};

use crate::controller::{Controller, HOURS_PER_DAY, StateChange};
use crate::jump::ManualJump;
use crate::store::{StateKey, Store};

/// The controller plus the store it persists to.
///
/// Loading never fails: missing or unreadable values start at zero. Saving
/// never fails either; write errors are logged and the in-memory state stays
/// authoritative.
#[derive(Debug)]
pub struct Session<S> {
    controller: Controller,
    previous_day: Option<u64>,
    store: S,
}

impl<S: Store> Session<S> {
    /// Loads the day, hour and animation context from `store`.
    ///
    /// Negative days become 0 and the hour is reduced modulo 24. The hub
    /// rotation and the previous day are restored when present, so the hub
    /// keeps accumulating and the strand slide is known across runs.
    #[tracing::instrument(skip_all)]
    pub fn open(store: S) -> Self {
        let day = load_or_zero(&store, StateKey::Day).max(0) as u64;
        let hour = load_or_zero(&store, StateKey::Hour).rem_euclid(i64::from(HOURS_PER_DAY)) as u8;
        let controller = match load_optional(&store, StateKey::HubRotation) {
            Some(hub) => Controller::with_hub_rotation(day, hour, hub),
            None => Controller::new(day, hour),
        };
        let previous_day = load_optional(&store, StateKey::PreviousDay)
            .and_then(|v| u64::try_from(v).ok());
        debug!(day, hour, ?previous_day, "session loaded");
        Self {
            controller,
            previous_day,
            store,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the current date.
    pub fn date(&self) -> CalendarDate {
        self.controller.date()
    }

    /// Returns the current hour of day.
    pub fn hour(&self) -> u8 {
        self.controller.hour()
    }

    /// Returns the day shown before the most recent day change, if any.
    pub fn previous_day(&self) -> Option<u64> {
        self.previous_day
    }

    /// Returns the strand shown before the most recent day change, if any.
    pub fn previous_strand(&self) -> Option<Strand> {
        self.previous_day.map(|day| decompose(day).strand())
    }

    /// Moves the day by `delta` and persists it.
    pub fn bump_day(&mut self, delta: i64) -> StateChange {
        let before = self.controller.absolute_day();
        let change = self.controller.bump_day(delta);
        self.commit(before, change);
        change
    }

    /// Moves the hour by `delta`, rolling the day on the wrap edges.
    pub fn bump_hour(&mut self, delta: i64) -> StateChange {
        let before = self.controller.absolute_day();
        let change = self.controller.bump_hour(delta);
        self.commit(before, change);
        change
    }

    /// Jumps to a manual date.
    pub fn jump_to(&mut self, target: &ManualJump) -> StateChange {
        let before = self.controller.absolute_day();
        let change = self.controller.jump_to(target);
        self.commit(before, change);
        change
    }

    /// Gives back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, day_before: u64, change: StateChange) {
        if change.day_changed {
            self.previous_day = Some(day_before);
            let day = i64::try_from(self.controller.absolute_day()).unwrap_or(i64::MAX);
            self.persist(StateKey::Day, day);
            self.persist(
                StateKey::PreviousDay,
                i64::try_from(day_before).unwrap_or(i64::MAX),
            );
        }
        if change.hour_changed {
            self.persist(StateKey::Hour, i64::from(self.controller.hour()));
        }
        if change.hour_changed || change.day_changed {
            self.persist(StateKey::HubRotation, self.controller.hub_degrees());
        }
    }

    fn persist(&mut self, key: StateKey, value: i64) {
        if let Err(e) = self.store.save(key, value) {
            warn!(%key, value, error = %e, "failed to persist state");
        }
    }
}

fn load_optional<S: Store>(store: &S, key: StateKey) -> Option<i64> {
    store
        .load(key)
        .inspect_err(|e| debug!(%key, error = %e, "ignoring unreadable value"))
        .ok()
        .flatten()
}

fn load_or_zero<S: Store>(store: &S, key: StateKey) -> i64 {
    match store.load(key) {
        Ok(Some(value)) => value,
        Ok(None) => 0,
        Err(e) => {
            warn!(%key, error = %e, "could not load state, starting from zero");
            0
        }
    }
}
