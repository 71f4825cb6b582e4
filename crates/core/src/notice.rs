// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projection of alarm events onto a single outward-facing notice
//!
//! Display surfaces consume one shape with a status tag instead of
//! four event payloads; the mapping is a pure function.

use crate::event::AlarmEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an alarm notice reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeStatus {
    Triggered,
    Scheduled,
    Unscheduled,
    Stopped,
    Snoozed,
}

impl fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeStatus::Triggered => write!(f, "triggered"),
            NoticeStatus::Scheduled => write!(f, "scheduled"),
            NoticeStatus::Unscheduled => write!(f, "unscheduled"),
            NoticeStatus::Stopped => write!(f, "stopped"),
            NoticeStatus::Snoozed => write!(f, "snoozed"),
        }
    }
}

/// The unified outward representation of the four alarm events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmNotice {
    pub status: NoticeStatus,
    pub hour: u8,
    pub minute: u8,
    pub timeout: u32,
    pub volume: u8,
    /// Present only for scheduled/unscheduled
    pub count: Option<usize>,
    /// Present only for triggered/scheduled/unscheduled
    pub repeat: Option<bool>,
    pub shuffle: Option<bool>,
}

/// Map an event onto the unified notice shape
pub fn notice_for(event: &AlarmEvent) -> AlarmNotice {
    match *event {
        AlarmEvent::Triggered {
            hour,
            minute,
            timeout,
            volume,
            repeat,
            shuffle,
        } => AlarmNotice {
            status: NoticeStatus::Triggered,
            hour,
            minute,
            timeout,
            volume,
            count: None,
            repeat: Some(repeat),
            shuffle: Some(shuffle),
        },
        AlarmEvent::Scheduled {
            hour,
            minute,
            timeout,
            volume,
            count,
            repeat,
            shuffle,
        } => AlarmNotice {
            status: NoticeStatus::Scheduled,
            hour,
            minute,
            timeout,
            volume,
            count: Some(count),
            repeat: Some(repeat),
            shuffle: Some(shuffle),
        },
        AlarmEvent::Unscheduled {
            hour,
            minute,
            timeout,
            volume,
            count,
            repeat,
            shuffle,
        } => AlarmNotice {
            status: NoticeStatus::Unscheduled,
            hour,
            minute,
            timeout,
            volume,
            count: Some(count),
            repeat: Some(repeat),
            shuffle: Some(shuffle),
        },
        AlarmEvent::Stopped {
            hour,
            minute,
            timeout,
            volume,
            snoozed,
        } => AlarmNotice {
            // A snoozed stop reads differently on a display than a
            // final dismissal
            status: if snoozed {
                NoticeStatus::Snoozed
            } else {
                NoticeStatus::Stopped
            },
            hour,
            minute,
            timeout,
            volume,
            count: None,
            repeat: None,
            shuffle: None,
        },
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
