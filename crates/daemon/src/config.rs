// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration
//!
//! Loaded from a toml file; everything has a workable default so a
//! bare `roused` run works without one.

use async_trait::async_trait;
use chrono::NaiveDate;
use rouse_adapters::{HttpCalendar, StaticCalendar};
use rouse_core::{NonWorkingDayOracle, OracleError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from loading the daemon configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which calendar answers non-working-day queries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum CalendarConfig {
    /// Every day is a working day
    #[default]
    None,
    /// A configured date list, optionally plus weekends
    Static {
        #[serde(default)]
        weekends: bool,
        #[serde(default)]
        dates: Vec<NaiveDate>,
    },
    /// An HTTP service queried per date
    Http {
        /// URL template with a `{date}` placeholder
        url: String,
        #[serde(with = "humantime_serde", default = "default_calendar_timeout")]
        timeout: Duration,
    },
}

fn default_calendar_timeout() -> Duration {
    Duration::from_secs(5)
}

impl CalendarConfig {
    /// Build the oracle this configuration describes
    pub fn build(&self) -> CalendarOracle {
        match self {
            CalendarConfig::None => CalendarOracle::Static(StaticCalendar::default()),
            CalendarConfig::Static { weekends, dates } => {
                CalendarOracle::Static(StaticCalendar::new(dates.iter().copied(), *weekends))
            }
            CalendarConfig::Http { url, timeout } => {
                CalendarOracle::Http(HttpCalendar::new(url.clone(), *timeout))
            }
        }
    }
}

/// The one concrete oracle type the daemon wires into the engine
#[derive(Clone)]
pub enum CalendarOracle {
    Static(StaticCalendar),
    Http(HttpCalendar),
}

#[async_trait]
impl NonWorkingDayOracle for CalendarOracle {
    async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, OracleError> {
        match self {
            CalendarOracle::Static(oracle) => oracle.is_non_working_day(date).await,
            CalendarOracle::Http(oracle) => oracle.is_non_working_day(date).await,
        }
    }
}

/// Daemon configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Where alarms and logs live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log file; defaults to `<data_dir>/roused.log`
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    /// Default tracing filter, overridable via RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rouse")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_path: None,
            log_filter: default_log_filter(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load from a toml file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Where alarm records are stored
    pub fn alarms_dir(&self) -> PathBuf {
        self.data_dir.join("alarms")
    }

    /// Resolved log file path
    pub fn log_path(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("roused.log"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
