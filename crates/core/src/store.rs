// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm store seam

use crate::alarm::{Alarm, AlarmId, AlarmPatch, NewAlarm};
use thiserror::Error;

/// Errors from alarm persistence
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CRUD over persisted alarms
///
/// Implementations assign identifiers on `add`. Absent ids surface as
/// `None`/`false`, not as errors; the engine decides what missing
/// means. `list_all` returns alarms in ascending id order so
/// scheduling scans are deterministic.
pub trait AlarmStore: Send + Sync + 'static {
    /// Persist a new alarm and return its assigned id
    fn add(&self, alarm: NewAlarm) -> Result<AlarmId, StoreError>;

    fn get(&self, id: &AlarmId) -> Result<Option<Alarm>, StoreError>;

    /// Apply a partial update; false when the alarm does not exist
    fn update(&self, id: &AlarmId, patch: &AlarmPatch) -> Result<bool, StoreError>;

    /// Remove an alarm; false when it does not exist
    fn delete(&self, id: &AlarmId) -> Result<bool, StoreError>;

    fn list_all(&self) -> Result<Vec<Alarm>, StoreError>;
}
