// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm model and validation rules

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for an alarm
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlarmId(pub String);

impl AlarmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AlarmId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AlarmId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Errors from alarm field validation
///
/// A closed set of named rules; callers of add/update receive these
/// directly rather than a logged-and-swallowed failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    InvalidRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("no weekday selected")]
    InvalidDaySet,
}

/// Time of day an alarm fires at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmTime {
    pub hour: u8,
    pub minute: u8,
}

impl AlarmTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        let time = Self { hour, minute };
        time.check()?;
        Ok(time)
    }

    /// Range checks; serde accepts any u8, so drafts re-check on validation
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.hour > 23 {
            return Err(ValidationError::InvalidRange {
                field: "hour",
                value: i64::from(self.hour),
                min: 0,
                max: 23,
            });
        }
        if self.minute > 59 {
            return Err(ValidationError::InvalidRange {
                field: "minute",
                value: i64::from(self.minute),
                min: 0,
                max: 59,
            });
        }
        Ok(())
    }

    /// True when this time is strictly later in the day than `hour:minute`.
    ///
    /// Full time ordering: a later hour qualifies regardless of the
    /// minute field.
    pub fn is_later_than(&self, hour: u8, minute: u8) -> bool {
        self.hour > hour || (self.hour == hour && self.minute > minute)
    }

    /// Exact minute match
    pub fn matches(&self, hour: u8, minute: u8) -> bool {
        self.hour == hour && self.minute == minute
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Enabled weekdays for an alarm, one flag per day
///
/// Days absent from the serialized form default to disabled; unknown
/// keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaySet {
    #[serde(default)]
    pub mon: bool,
    #[serde(default)]
    pub tue: bool,
    #[serde(default)]
    pub wed: bool,
    #[serde(default)]
    pub thu: bool,
    #[serde(default)]
    pub fri: bool,
    #[serde(default)]
    pub sat: bool,
    #[serde(default)]
    pub sun: bool,
}

impl DaySet {
    /// Every weekday enabled
    pub const fn all() -> Self {
        Self {
            mon: true,
            tue: true,
            wed: true,
            thu: true,
            fri: true,
            sat: true,
            sun: true,
        }
    }

    /// Enable only the given days
    pub fn only(days: &[Weekday]) -> Self {
        let mut set = Self::default();
        for day in days {
            match day {
                Weekday::Mon => set.mon = true,
                Weekday::Tue => set.tue = true,
                Weekday::Wed => set.wed = true,
                Weekday::Thu => set.thu = true,
                Weekday::Fri => set.fri = true,
                Weekday::Sat => set.sat = true,
                Weekday::Sun => set.sun = true,
            }
        }
        set
    }

    pub fn contains(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }

    /// True when at least one day is enabled
    pub fn any(&self) -> bool {
        self.mon || self.tue || self.wed || self.thu || self.fri || self.sat || self.sun
    }
}

/// A persisted alarm rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: AlarmId,
    pub time: AlarmTime,
    pub days: DaySet,
    /// When true the alarm also applies on days the calendar oracle
    /// flags as non-working
    pub non_working_days: bool,
    pub enabled: bool,
    /// Ringing minutes before auto-stop; zero stops immediately
    pub timeout: u32,
    /// Playback volume, 1..=100
    pub volume: u8,
    pub repeat: bool,
    pub shuffle: bool,
}

/// A validated alarm that has not been assigned an identifier yet.
///
/// Stores assign the id on `add` and return it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlarm {
    pub time: AlarmTime,
    pub days: DaySet,
    pub non_working_days: bool,
    pub enabled: bool,
    pub timeout: u32,
    pub volume: u8,
    pub repeat: bool,
    pub shuffle: bool,
}

impl NewAlarm {
    pub fn with_id(self, id: AlarmId) -> Alarm {
        Alarm {
            id,
            time: self.time,
            days: self.days,
            non_working_days: self.non_working_days,
            enabled: self.enabled,
            timeout: self.timeout,
            volume: self.volume,
            repeat: self.repeat,
            shuffle: self.shuffle,
        }
    }
}

/// Unvalidated fields for a new alarm, as received from a caller
///
/// Every field is required; `validate` applies the named rules and
/// produces a `NewAlarm` (enabled by default, as created alarms are).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlarmDraft {
    pub time: Option<AlarmTime>,
    pub days: Option<DaySet>,
    pub non_working_days: Option<bool>,
    pub timeout: Option<u32>,
    pub volume: Option<u8>,
    pub repeat: Option<bool>,
    pub shuffle: Option<bool>,
}

impl AlarmDraft {
    pub fn validate(self) -> Result<NewAlarm, ValidationError> {
        let time = self.time.ok_or(ValidationError::MissingField("time"))?;
        time.check()?;

        let days = self.days.ok_or(ValidationError::MissingField("days"))?;
        if !days.any() {
            return Err(ValidationError::InvalidDaySet);
        }

        let non_working_days = self
            .non_working_days
            .ok_or(ValidationError::MissingField("non_working_days"))?;
        let timeout = self.timeout.ok_or(ValidationError::MissingField("timeout"))?;
        let volume = self.volume.ok_or(ValidationError::MissingField("volume"))?;
        check_volume(volume)?;
        let repeat = self.repeat.ok_or(ValidationError::MissingField("repeat"))?;
        let shuffle = self.shuffle.ok_or(ValidationError::MissingField("shuffle"))?;

        Ok(NewAlarm {
            time,
            days,
            non_working_days,
            enabled: true,
            timeout,
            volume,
            repeat,
            shuffle,
        })
    }
}

/// Partial update to an existing alarm
///
/// Only the carried fields are validated and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlarmPatch {
    pub time: Option<AlarmTime>,
    pub days: Option<DaySet>,
    pub non_working_days: Option<bool>,
    pub enabled: Option<bool>,
    pub timeout: Option<u32>,
    pub volume: Option<u8>,
    pub repeat: Option<bool>,
    pub shuffle: Option<bool>,
}

impl AlarmPatch {
    /// A patch that only flips the enabled flag
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(time) = &self.time {
            time.check()?;
        }
        if let Some(days) = &self.days {
            if !days.any() {
                return Err(ValidationError::InvalidDaySet);
            }
        }
        if let Some(volume) = self.volume {
            check_volume(volume)?;
        }
        Ok(())
    }

    /// Apply the carried fields to an alarm in place
    pub fn apply_to(&self, alarm: &mut Alarm) {
        if let Some(time) = self.time {
            alarm.time = time;
        }
        if let Some(days) = self.days {
            alarm.days = days;
        }
        if let Some(non_working_days) = self.non_working_days {
            alarm.non_working_days = non_working_days;
        }
        if let Some(enabled) = self.enabled {
            alarm.enabled = enabled;
        }
        if let Some(timeout) = self.timeout {
            alarm.timeout = timeout;
        }
        if let Some(volume) = self.volume {
            alarm.volume = volume;
        }
        if let Some(repeat) = self.repeat {
            alarm.repeat = repeat;
        }
        if let Some(shuffle) = self.shuffle {
            alarm.shuffle = shuffle;
        }
    }
}

fn check_volume(volume: u8) -> Result<(), ValidationError> {
    if !(1..=100).contains(&volume) {
        return Err(ValidationError::InvalidRange {
            field: "volume",
            value: i64::from(volume),
            min: 1,
            max: 100,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "alarm_tests.rs"]
mod tests;
