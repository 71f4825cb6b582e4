// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-alarm stop timers
//!
//! Each triggered alarm rings for its timeout and is then stopped
//! automatically. The countdown is a spawned sleep task whose handle
//! lives in the shared state; cancelling means aborting the handle.

use crate::runtime::AlarmClock;
use rouse_core::{AlarmEvent, AlarmId, AlarmStore, EventSink, NonWorkingDayOracle, WallClock};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

impl<S, O, C, E> AlarmClock<S, O, C, E>
where
    S: AlarmStore,
    O: NonWorkingDayOracle,
    C: WallClock + 'static,
    E: EventSink + 'static,
{
    /// Arm the auto-stop countdown for an alarm that just fired
    ///
    /// A zero timeout arms a timer that fires immediately.
    pub(crate) fn arm_stop_timer(self: &Arc<Self>, id: AlarmId, timeout_minutes: u32) {
        let engine = Arc::clone(self);
        let timer_id = id.clone();
        let duration = Duration::from_secs(u64::from(timeout_minutes) * 60);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            engine.stop_with(&timer_id, false);
        });

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = state.ringing.insert(id.clone(), handle) {
            // Each alarm fires at most once per matching minute, so a
            // live timer here means a stop went missing
            warn!(alarm = %id, "replacing a live stop timer");
            previous.abort();
        }
    }

    /// Stop a ringing alarm on external request
    pub fn stop_alarm(&self, id: &AlarmId) {
        self.stop_with(id, true);
    }

    /// Snooze a ringing alarm
    ///
    /// Same countdown release as `stop_alarm`; re-arming is the
    /// caller's move, never automatic.
    pub fn snooze_alarm(&self, id: &AlarmId) {
        self.stop_with(id, true);
    }

    /// True while an alarm's auto-stop countdown is live
    pub fn is_ringing(&self, id: &AlarmId) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .ringing
            .contains_key(id)
    }

    /// Release the countdown and announce the stop
    ///
    /// Idempotent: an id with no live timer is a no-op. An alarm
    /// deleted mid-ring is logged and produces no event.
    pub(crate) fn stop_with(&self, id: &AlarmId, snoozed: bool) {
        let handle = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.ringing.remove(id)
        };
        let Some(handle) = handle else {
            debug!(alarm = %id, "stop requested for an alarm that is not ringing");
            return;
        };
        // On natural expiry this aborts the calling task itself, which
        // is fine: nothing below awaits, so the publish still runs
        handle.abort();

        match self.store.get(id) {
            Ok(Some(alarm)) => {
                info!(alarm = %id, snoozed, "alarm stopped");
                self.sink.publish(AlarmEvent::Stopped {
                    hour: alarm.time.hour,
                    minute: alarm.time.minute,
                    timeout: alarm.timeout,
                    volume: alarm.volume,
                    snoozed,
                });
            }
            Ok(None) => {
                warn!(alarm = %id, "unable to stop alarm: not found");
            }
            Err(error) => {
                warn!(alarm = %id, %error, "unable to load alarm for stop");
            }
        }
    }

    /// Silently discard a live countdown, if any (alarm removal)
    pub(crate) fn cancel_timer(&self, id: &AlarmId) {
        let handle = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.ringing.remove(id)
        };
        if let Some(handle) = handle {
            debug!(alarm = %id, "discarding live stop timer");
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "ringer_tests.rs"]
mod tests;
