// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-working-day oracle seam

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors from non-working-day queries
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("calendar query timed out")]
    Timeout,
    #[error("calendar unavailable: {0}")]
    Unavailable(String),
    #[error("malformed calendar response: {0}")]
    Malformed(String),
}

/// Answers whether a calendar date is exempt from the normal weekday
/// schedule
///
/// Queries are best-effort: callers cache the last good answer and
/// keep it when a query fails.
#[async_trait]
pub trait NonWorkingDayOracle: Send + Sync + 'static {
    async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, OracleError>;
}

/// Switchable fake oracle for tests
#[derive(Clone, Default)]
pub struct FakeOracle {
    inner: Arc<Mutex<FakeOracleState>>,
}

#[derive(Default)]
struct FakeOracleState {
    non_working: HashSet<NaiveDate>,
    failing: bool,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag or unflag a date as non-working
    pub fn set_non_working(&self, date: NaiveDate, non_working: bool) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if non_working {
            state.non_working.insert(date);
        } else {
            state.non_working.remove(&date);
        }
    }

    /// Make every query fail until switched back
    pub fn set_failing(&self, failing: bool) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.failing = failing;
    }
}

#[async_trait]
impl NonWorkingDayOracle for FakeOracle {
    async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, OracleError> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.failing {
            return Err(OracleError::Unavailable("fake oracle set to fail".into()));
        }
        Ok(state.non_working.contains(&date))
    }
}
