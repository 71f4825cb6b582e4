// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Next-alarm selection across the today/tomorrow horizon

use crate::runtime::AlarmClock;
use chrono::{Datelike, NaiveDateTime, Timelike};
use rouse_core::{
    Alarm, AlarmEvent, AlarmStore, DayContext, EventSink, NonWorkingDayOracle, WallClock,
};
use tracing::{debug, warn};

/// Pure selection of the next upcoming alarm
///
/// Today pass first: the first alarm (in the given order) enabled for
/// today's weekday and due strictly later than `now`. A later hour
/// qualifies on its own; minutes only break ties within the current
/// hour. Tomorrow pass only when today yields nothing: any time of
/// day qualifies, only the weekday is checked. Alarms are skipped on
/// a non-working day unless they opt in via `non_working_days`.
pub fn next_upcoming<'a>(
    alarms: &'a [Alarm],
    now: NaiveDateTime,
    days: &DayContext,
) -> Option<&'a Alarm> {
    let hour = now.hour() as u8;
    let minute = now.minute() as u8;
    let today = now.weekday();
    let tomorrow = days.tomorrow.date.weekday();

    alarms
        .iter()
        .find(|alarm| {
            eligible(alarm, days.today_non_working)
                && alarm.days.contains(today)
                && alarm.time.is_later_than(hour, minute)
        })
        .or_else(|| {
            alarms.iter().find(|alarm| {
                eligible(alarm, days.tomorrow.non_working) && alarm.days.contains(tomorrow)
            })
        })
}

fn eligible(alarm: &Alarm, non_working_day: bool) -> bool {
    alarm.enabled && (alarm.non_working_days || !non_working_day)
}

impl<S, O, C, E> AlarmClock<S, O, C, E>
where
    S: AlarmStore,
    O: NonWorkingDayOracle,
    C: WallClock + 'static,
    E: EventSink + 'static,
{
    /// Announce the next upcoming alarm, if any
    ///
    /// At most one `alarm:scheduled` event per invocation; finding no
    /// candidate emits nothing and leaves the announced set untouched.
    pub fn schedule_next(&self) {
        let alarms = match self.store.list_all() {
            Ok(alarms) => alarms,
            Err(error) => {
                warn!(%error, "cannot scan alarms for scheduling");
                return;
            }
        };
        let days = *self.days.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now();

        let Some(alarm) = next_upcoming(&alarms, now, &days) else {
            return;
        };

        let count = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.scheduled.insert(alarm.id.clone());
            state.scheduled.len()
        };
        debug!(alarm = %alarm.id, time = %alarm.time, "next alarm announced");
        self.sink.publish(AlarmEvent::Scheduled {
            hour: alarm.time.hour,
            minute: alarm.time.minute,
            timeout: alarm.timeout,
            volume: alarm.volume,
            count,
            repeat: alarm.repeat,
            shuffle: alarm.shuffle,
        });
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
