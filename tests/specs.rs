//! Behavioral specifications for the rouse workspace.
//!
//! Engine specs drive the alarm clock through its public API with
//! fake collaborators; daemon specs invoke the roused binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

// daemon/
#[path = "specs/daemon/check.rs"]
mod daemon_check;

// engine/
#[path = "specs/engine/ringing.rs"]
mod engine_ringing;
#[path = "specs/engine/scenarios.rs"]
mod engine_scenarios;
