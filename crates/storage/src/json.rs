//! JSON file-based alarm store

use rouse_core::{Alarm, AlarmId, AlarmPatch, AlarmStore, NewAlarm, StoreError};
use std::fs;
use std::path::PathBuf;

/// JSON file-based alarm store, one file per alarm
#[derive(Clone)]
pub struct JsonAlarmStore {
    base_path: PathBuf,
}

impl JsonAlarmStore {
    /// Open a store at the given path
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Open a temporary store for testing
    pub fn open_temp() -> Result<Self, StoreError> {
        let temp_dir = std::env::temp_dir().join(format!("rouse-test-{}", uuid::Uuid::new_v4()));
        Self::open(temp_dir)
    }

    fn path_for(&self, id: &AlarmId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    fn save(&self, alarm: &Alarm) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(alarm)?;
        fs::write(self.path_for(&alarm.id), json)?;
        Ok(())
    }
}

impl AlarmStore for JsonAlarmStore {
    fn add(&self, alarm: NewAlarm) -> Result<AlarmId, StoreError> {
        let alarm = alarm.with_id(AlarmId::random());
        self.save(&alarm)?;
        Ok(alarm.id)
    }

    fn get(&self, id: &AlarmId) -> Result<Option<Alarm>, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn update(&self, id: &AlarmId, patch: &AlarmPatch) -> Result<bool, StoreError> {
        let Some(mut alarm) = self.get(id)? else {
            return Ok(false);
        };
        patch.apply_to(&mut alarm);
        self.save(&alarm)?;
        Ok(true)
    }

    fn delete(&self, id: &AlarmId) -> Result<bool, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    fn list_all(&self) -> Result<Vec<Alarm>, StoreError> {
        let mut alarms = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                let json = fs::read_to_string(&path)?;
                alarms.push(serde_json::from_str(&json)?);
            }
        }
        // Directory order is filesystem-dependent; scans need a stable order
        alarms.sort_by(|a: &Alarm, b: &Alarm| a.id.cmp(&b.id));
        Ok(alarms)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
