// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configured-date calendar oracle

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use rouse_core::{NonWorkingDayOracle, OracleError};
use std::collections::HashSet;

/// Calendar oracle answering from a configured date set
///
/// Optionally treats every Saturday and Sunday as non-working on top
/// of the listed dates. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    dates: HashSet<NaiveDate>,
    weekends: bool,
}

impl StaticCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>, weekends: bool) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            weekends,
        }
    }
}

#[async_trait]
impl NonWorkingDayOracle for StaticCalendar {
    async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, OracleError> {
        if self.weekends && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(true);
        }
        Ok(self.dates.contains(&date))
    }
}
