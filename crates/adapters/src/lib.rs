// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Production calendar oracles for the alarm engine

pub mod http;
pub mod static_calendar;

pub use http::HttpCalendar;
pub use static_calendar::StaticCalendar;
