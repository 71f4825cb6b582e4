// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound alarm announcements

use serde::{Deserialize, Serialize};

/// Announcements emitted by the engine for interested parties
///
/// The payloads carry alarm fields rather than the alarm id: consumers
/// are display/playback surfaces that only need the what and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmEvent {
    /// An alarm fired at the current minute
    Triggered {
        hour: u8,
        minute: u8,
        timeout: u32,
        volume: u8,
        repeat: bool,
        shuffle: bool,
    },

    /// An alarm was identified as the next to fire; `count` is the
    /// number of alarms currently announced as next
    Scheduled {
        hour: u8,
        minute: u8,
        timeout: u32,
        volume: u8,
        count: usize,
        repeat: bool,
        shuffle: bool,
    },

    /// An alarm left the announced set (disabled or removed)
    Unscheduled {
        hour: u8,
        minute: u8,
        timeout: u32,
        volume: u8,
        count: usize,
        repeat: bool,
        shuffle: bool,
    },

    /// A ringing alarm stopped, either by timeout expiry or on request
    Stopped {
        hour: u8,
        minute: u8,
        timeout: u32,
        volume: u8,
        snoozed: bool,
    },
}

impl AlarmEvent {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            AlarmEvent::Triggered { .. } => "alarm:triggered",
            AlarmEvent::Scheduled { .. } => "alarm:scheduled",
            AlarmEvent::Unscheduled { .. } => "alarm:unscheduled",
            AlarmEvent::Stopped { .. } => "alarm:stopped",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
