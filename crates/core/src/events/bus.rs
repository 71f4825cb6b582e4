// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing alarm announcements to subscribers

use crate::event::AlarmEvent;
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::mpsc;

/// Receiver for event delivery
pub type EventReceiver = mpsc::UnboundedReceiver<AlarmEvent>;

/// Anything the engine can announce alarm events through
pub trait EventSink: Send + Sync {
    fn publish(&self, event: AlarmEvent);
}

/// The event bus delivers every announcement to every subscriber
pub struct EventBus {
    subscribers: Arc<RwLock<Vec<mpsc::UnboundedSender<AlarmEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to all alarm events
    /// Returns a receiver; dropped receivers are pruned on publish
    pub fn subscribe(&self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.push(tx);
        rx
    }

    /// Get count of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|tx| !tx.is_closed())
            .count()
    }
}

impl EventSink for EventBus {
    fn publish(&self, event: AlarmEvent) {
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// Test sink that records every published event in order
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AlarmEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far
    pub fn events(&self) -> Vec<AlarmEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Events with the given name, e.g. "alarm:scheduled"
    pub fn named(&self, name: &str) -> Vec<AlarmEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.name() == name)
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl EventSink for RecordingSink {
    fn publish(&self, event: AlarmEvent) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
