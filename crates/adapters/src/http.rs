// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP calendar oracle
//!
//! Queries a calendar service with a bounded-timeout GET per date.
//! The URL template carries a `{date}` placeholder replaced with the
//! ISO date, e.g. `https://calendar.local/non-working?date={date}`.

use async_trait::async_trait;
use chrono::NaiveDate;
use rouse_core::{NonWorkingDayOracle, OracleError};
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

/// Calendar oracle backed by an HTTP service
#[derive(Clone)]
pub struct HttpCalendar {
    agent: Agent,
    url_template: String,
}

impl HttpCalendar {
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            url_template: url_template.into(),
        }
    }

    fn url_for(&self, date: NaiveDate) -> String {
        self.url_template
            .replace("{date}", &date.format("%Y-%m-%d").to_string())
    }
}

#[async_trait]
impl NonWorkingDayOracle for HttpCalendar {
    async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, OracleError> {
        let agent = self.agent.clone();
        let url = self.url_for(date);
        debug!(%url, "querying calendar service");

        // ureq is blocking; keep the reactor free while the GET runs
        let body = tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(&url)
                .call()
                .map_err(|e| OracleError::Unavailable(e.to_string()))?;
            response
                .body_mut()
                .read_to_string()
                .map_err(|e| OracleError::Unavailable(e.to_string()))
        })
        .await
        .map_err(|e| OracleError::Unavailable(e.to_string()))??;

        parse_body(&body)
    }
}

/// Accepts a bare JSON boolean or an object carrying a boolean
/// `non_working_day` field
fn parse_body(body: &str) -> Result<bool, OracleError> {
    let value: serde_json::Value = serde_json::from_str(body.trim())
        .map_err(|e| OracleError::Malformed(e.to_string()))?;

    match &value {
        serde_json::Value::Bool(flag) => Ok(*flag),
        serde_json::Value::Object(fields) => fields
            .get("non_working_day")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| OracleError::Malformed("missing non_working_day field".into())),
        _ => Err(OracleError::Malformed(format!(
            "unexpected calendar payload: {}",
            value
        ))),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
