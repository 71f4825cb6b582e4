// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event delivery: sink seam and in-process bus

mod bus;

pub use bus::{EventBus, EventReceiver, EventSink, RecordingSink};
