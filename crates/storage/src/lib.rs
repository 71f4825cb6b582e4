// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rouse-storage: Alarm persistence backends
//!
//! `JsonAlarmStore` keeps one JSON file per alarm under a base
//! directory; `MemoryAlarmStore` backs tests and ephemeral runs.

mod json;
mod memory;

pub use json::JsonAlarmStore;
pub use memory::MemoryAlarmStore;
