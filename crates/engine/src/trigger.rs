// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minute-tick handling: exact-match firing and the midnight refresh

use crate::runtime::AlarmClock;
use chrono::NaiveDate;
use rouse_core::{
    AlarmEvent, AlarmStore, EventSink, MinuteTick, NonWorkingDayOracle, OracleError, WallClock,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on a single oracle query; scheduling never blocks on a
/// slow calendar
const ORACLE_TIMEOUT: Duration = Duration::from_secs(10);

impl<S, O, C, E> AlarmClock<S, O, C, E>
where
    S: AlarmStore,
    O: NonWorkingDayOracle,
    C: WallClock + 'static,
    E: EventSink + 'static,
{
    /// Drive the engine for one minute of wall time
    ///
    /// Fires every alarm matching the tick exactly — no catch-up for
    /// missed minutes. Each match is announced, the next-alarm pointer
    /// advances, and an auto-stop countdown is armed.
    pub async fn on_minute_tick(self: &Arc<Self>, tick: MinuteTick) {
        if tick.is_midnight() {
            self.refresh_day_context().await;
        }

        let alarms = match self.store.list_all() {
            Ok(alarms) => alarms,
            Err(error) => {
                warn!(%error, "cannot scan alarms for triggering");
                return;
            }
        };
        let today_non_working = self
            .days
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .today_non_working;

        for alarm in alarms {
            if !alarm.non_working_days && today_non_working {
                continue;
            }
            if !alarm.enabled {
                continue;
            }
            if !alarm.days.contains(tick.weekday) {
                continue;
            }
            if !alarm.time.matches(tick.hour, tick.minute) {
                continue;
            }

            info!(alarm = %alarm.id, time = %alarm.time, "alarm triggered");
            self.sink.publish(AlarmEvent::Triggered {
                hour: alarm.time.hour,
                minute: alarm.time.minute,
                timeout: alarm.timeout,
                volume: alarm.volume,
                repeat: alarm.repeat,
                shuffle: alarm.shuffle,
            });
            self.schedule_next();
            self.arm_stop_timer(alarm.id.clone(), alarm.timeout);
        }
    }

    /// Refresh the cached non-working flags for today and tomorrow
    ///
    /// Oracle failures are logged and the cached flags kept; the
    /// tomorrow date still rolls forward so it stays `today + 1`.
    pub(crate) async fn refresh_day_context(&self) {
        let today = self.clock.today();
        match self.query_oracle(today).await {
            Ok(non_working) => {
                let mut days = self.days.lock().unwrap_or_else(|e| e.into_inner());
                days.today_non_working = non_working;
            }
            Err(error) => {
                warn!(%error, date = %today, "unable to refresh non-working flag for today");
            }
        }

        let tomorrow = {
            let mut days = self.days.lock().unwrap_or_else(|e| e.into_inner());
            days.roll_tomorrow(today);
            days.tomorrow.date
        };
        match self.query_oracle(tomorrow).await {
            Ok(non_working) => {
                let mut days = self.days.lock().unwrap_or_else(|e| e.into_inner());
                days.tomorrow.non_working = non_working;
            }
            Err(error) => {
                warn!(%error, date = %tomorrow, "unable to refresh non-working flag for tomorrow");
            }
        }
    }

    async fn query_oracle(&self, date: NaiveDate) -> Result<bool, OracleError> {
        match tokio::time::timeout(ORACLE_TIMEOUT, self.oracle.is_non_working_day(date)).await {
            Ok(result) => result,
            Err(_) => Err(OracleError::Timeout),
        }
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
