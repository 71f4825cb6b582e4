// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The alarm clock runtime and its membership bookkeeping

use crate::error::ClockError;
use rouse_core::{
    Alarm, AlarmDraft, AlarmEvent, AlarmId, AlarmPatch, AlarmStore, DayContext, EventSink,
    NonWorkingDayOracle, WallClock,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// The two mutable collections of the system, guarded together:
/// lost updates between a trigger's timer-arming and a concurrent
/// stop are only prevented by sharing one lock.
#[derive(Default)]
pub(crate) struct ClockState {
    /// Ids announced as "the next upcoming alarm"; reported as a count
    pub(crate) scheduled: HashSet<AlarmId>,
    /// Live auto-stop countdowns, keyed by alarm id
    pub(crate) ringing: HashMap<AlarmId, JoinHandle<()>>,
}

/// The alarm clock engine
///
/// Generic over its collaborators: the alarm store, the
/// non-working-day oracle, the wall clock, and the event sink.
pub struct AlarmClock<S, O, C, E> {
    pub(crate) store: S,
    pub(crate) oracle: O,
    pub(crate) clock: C,
    pub(crate) sink: E,
    pub(crate) days: Mutex<DayContext>,
    pub(crate) state: Mutex<ClockState>,
}

impl<S, O, C, E> AlarmClock<S, O, C, E>
where
    S: AlarmStore,
    O: NonWorkingDayOracle,
    C: WallClock + 'static,
    E: EventSink + 'static,
{
    pub fn new(store: S, oracle: O, clock: C, sink: E) -> Arc<Self> {
        let days = DayContext::starting(clock.today());
        Arc::new(Self {
            store,
            oracle,
            clock,
            sink,
            days: Mutex::new(days),
            state: Mutex::new(ClockState::default()),
        })
    }

    /// Startup: refresh the day flags, then announce the next alarm
    pub async fn start(&self) {
        self.refresh_day_context().await;
        self.schedule_next();
    }

    /// All persisted alarms, ascending by id
    pub fn alarms(&self) -> Result<Vec<Alarm>, ClockError> {
        Ok(self.store.list_all()?)
    }

    pub fn alarm(&self, id: &AlarmId) -> Result<Option<Alarm>, ClockError> {
        Ok(self.store.get(id)?)
    }

    /// Validate and persist a new alarm, then re-announce the next
    /// upcoming alarm (the new one may be it)
    pub fn add_alarm(&self, draft: AlarmDraft) -> Result<AlarmId, ClockError> {
        let alarm = draft.validate()?;
        let id = self.store.add(alarm)?;
        debug!(alarm = %id, "alarm added");
        self.schedule_next();
        Ok(id)
    }

    /// Apply a partial update
    ///
    /// An enabled flag carried by the patch goes through the same
    /// membership bookkeeping as `set_enabled`; time/day changes
    /// re-announce the next alarm.
    pub fn update_alarm(&self, id: &AlarmId, patch: &AlarmPatch) -> Result<(), ClockError> {
        patch.validate()?;
        if !self.store.update(id, patch)? {
            return Err(ClockError::NotFound(id.clone()));
        }
        if let Some(enabled) = patch.enabled {
            if let Some(alarm) = self.store.get(id)? {
                self.note_membership(&alarm, enabled);
            }
        }
        self.schedule_next();
        Ok(())
    }

    /// Persist the enabled flag and adjust the announced set
    ///
    /// The membership event is the announcement; no separate
    /// scheduling pass runs here.
    pub fn set_enabled(&self, id: &AlarmId, enabled: bool) -> Result<(), ClockError> {
        let mut alarm = self
            .store
            .get(id)?
            .ok_or_else(|| ClockError::NotFound(id.clone()))?;
        if !self.store.update(id, &AlarmPatch::enabled(enabled))? {
            return Err(ClockError::NotFound(id.clone()));
        }
        alarm.enabled = enabled;
        self.note_membership(&alarm, enabled);
        Ok(())
    }

    /// Flip the enabled flag; returns the new value
    pub fn toggle_alarm(&self, id: &AlarmId) -> Result<bool, ClockError> {
        let alarm = self
            .store
            .get(id)?
            .ok_or_else(|| ClockError::NotFound(id.clone()))?;
        let enabled = !alarm.enabled;
        self.set_enabled(id, enabled)?;
        Ok(enabled)
    }

    /// Delete an alarm: a live stop timer is discarded first, and a
    /// scheduled announcement is withdrawn
    pub fn remove_alarm(&self, id: &AlarmId) -> Result<(), ClockError> {
        let alarm = self
            .store
            .get(id)?
            .ok_or_else(|| ClockError::NotFound(id.clone()))?;

        self.cancel_timer(id);

        if !self.store.delete(id)? {
            return Err(ClockError::NotFound(id.clone()));
        }
        debug!(alarm = %id, "alarm removed");

        let withdrawn = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.scheduled.remove(id).then(|| state.scheduled.len())
        };
        if let Some(count) = withdrawn {
            self.sink.publish(AlarmEvent::Unscheduled {
                hour: alarm.time.hour,
                minute: alarm.time.minute,
                timeout: alarm.timeout,
                volume: alarm.volume,
                count,
                repeat: alarm.repeat,
                shuffle: alarm.shuffle,
            });
        }
        Ok(())
    }

    /// Add or drop an alarm from the announced set and emit the
    /// matching event with the updated count
    pub(crate) fn note_membership(&self, alarm: &Alarm, enabled: bool) {
        let count = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if enabled {
                // Idempotent: re-enabling never double-counts
                state.scheduled.insert(alarm.id.clone());
            } else {
                state.scheduled.remove(&alarm.id);
            }
            state.scheduled.len()
        };
        let event = if enabled {
            AlarmEvent::Scheduled {
                hour: alarm.time.hour,
                minute: alarm.time.minute,
                timeout: alarm.timeout,
                volume: alarm.volume,
                count,
                repeat: alarm.repeat,
                shuffle: alarm.shuffle,
            }
        } else {
            AlarmEvent::Unscheduled {
                hour: alarm.time.hour,
                minute: alarm.time.minute,
                timeout: alarm.timeout,
                volume: alarm.volume,
                count,
                repeat: alarm.repeat,
                shuffle: alarm.shuffle,
            }
        };
        self.sink.publish(event);
    }

    /// Number of alarms currently announced as next
    pub fn scheduled_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .scheduled
            .len()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
