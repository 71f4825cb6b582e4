//! In-memory alarm store for tests and ephemeral runs

use rouse_core::{Alarm, AlarmId, AlarmPatch, AlarmStore, NewAlarm, StoreError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory alarm store
///
/// BTreeMap keeps ascending-id iteration for free. Clones share the
/// underlying map.
#[derive(Clone, Default)]
pub struct MemoryAlarmStore {
    alarms: Arc<Mutex<BTreeMap<AlarmId, Alarm>>>,
}

impl MemoryAlarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored alarms
    pub fn len(&self) -> usize {
        self.alarms.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlarmStore for MemoryAlarmStore {
    fn add(&self, alarm: NewAlarm) -> Result<AlarmId, StoreError> {
        let alarm = alarm.with_id(AlarmId::random());
        let id = alarm.id.clone();
        let mut alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        alarms.insert(id.clone(), alarm);
        Ok(id)
    }

    fn get(&self, id: &AlarmId) -> Result<Option<Alarm>, StoreError> {
        let alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        Ok(alarms.get(id).cloned())
    }

    fn update(&self, id: &AlarmId, patch: &AlarmPatch) -> Result<bool, StoreError> {
        let mut alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        match alarms.get_mut(id) {
            Some(alarm) => {
                patch.apply_to(alarm);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: &AlarmId) -> Result<bool, StoreError> {
        let mut alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        Ok(alarms.remove(id).is_some())
    }

    fn list_all(&self) -> Result<Vec<Alarm>, StoreError> {
        let alarms = self.alarms.lock().unwrap_or_else(|e| e.into_inner());
        Ok(alarms.values().cloned().collect())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
