// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cached non-working-day flags for today and tomorrow
//!
//! The engine refreshes this at startup and at each midnight tick;
//! between refreshes the cached answers are served as-is, including
//! after a failed oracle query.

use chrono::NaiveDate;

/// What is known about tomorrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TomorrowOutlook {
    pub date: NaiveDate,
    pub non_working: bool,
}

/// Process-wide day flags, owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub today_non_working: bool,
    pub tomorrow: TomorrowOutlook,
}

impl DayContext {
    /// Initial context before the first oracle refresh: both days
    /// assumed working, tomorrow's date derived from the clock
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            today_non_working: false,
            tomorrow: TomorrowOutlook {
                date: today.succ_opt().unwrap_or(today),
                non_working: false,
            },
        }
    }

    /// Advance tomorrow's date to `today + 1`, keeping the cached flag
    ///
    /// The date moves even when the oracle query that follows fails,
    /// so the `tomorrow.date == today + 1` invariant holds across
    /// failed refreshes.
    pub fn roll_tomorrow(&mut self, today: NaiveDate) {
        self.tomorrow.date = today.succ_opt().unwrap_or(today);
    }
}
