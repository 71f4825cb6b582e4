// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction for testable calendar time

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use std::sync::{Arc, Mutex};

/// A clock that provides the current local date and time
pub trait WallClock: Clone + Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real system clock reading local time
#[derive(Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Set the clock to a specific time
    pub fn set(&self, time: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = time;
    }

    /// Advance the clock by whole minutes
    pub fn advance_minutes(&self, minutes: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += chrono::Duration::minutes(minutes);
    }
}

impl WallClock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// One entry of the minute-granularity event stream driving the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteTick {
    pub hour: u8,
    pub minute: u8,
    pub weekday: Weekday,
}

impl MinuteTick {
    pub fn new(hour: u8, minute: u8, weekday: Weekday) -> Self {
        Self {
            hour,
            minute,
            weekday,
        }
    }

    /// The tick for a given wall-clock instant
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            weekday: now.weekday(),
        }
    }

    /// True at local midnight, when the day context must be refreshed
    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
