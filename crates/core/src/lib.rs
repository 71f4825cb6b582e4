// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rouse-core: Core library for the rouse alarm daemon
//!
//! This crate provides:
//! - The alarm model and its named validation rules
//! - Wall-clock and minute-tick abstractions
//! - The day context cache and the non-working-day oracle seam
//! - Outbound alarm events, the event bus, and the notice projection
//! - The alarm store seam

pub mod alarm;
pub mod clock;
pub mod day_context;
pub mod event;
pub mod events;
pub mod notice;
pub mod oracle;
pub mod store;

// Re-exports
pub use alarm::{
    Alarm, AlarmDraft, AlarmId, AlarmPatch, AlarmTime, DaySet, NewAlarm, ValidationError,
};
pub use clock::{FakeClock, MinuteTick, SystemClock, WallClock};
pub use day_context::{DayContext, TomorrowOutlook};
pub use event::AlarmEvent;
pub use events::{EventBus, EventReceiver, EventSink, RecordingSink};
pub use notice::{notice_for, AlarmNotice, NoticeStatus};
pub use oracle::{FakeOracle, NonWorkingDayOracle, OracleError};
pub use store::{AlarmStore, StoreError};
