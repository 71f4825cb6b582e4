// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for alarm clock operations

use rouse_core::{AlarmId, StoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by alarm clock operations
///
/// Oracle failures never appear here: scheduling treats the calendar
/// as best-effort and keeps its cached answers instead.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid alarm: {0}")]
    Validation(#[from] ValidationError),
    #[error("alarm not found: {0}")]
    NotFound(AlarmId),
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
