//! Posting-date normalization.
//!
//! Providers hand out publication dates as `YYYY-MM-DD`, RFC 3339 strings,
//! Unix seconds, or Unix milliseconds, and rarely say which. Epochs are read
//! as seconds first; a result in the future is reinterpreted as milliseconds.
//! Failures are logged and yield `None` so a bad date never blocks a record.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::config::NormalizeConfig;

/// A raw date value as found in a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDate<'a> {
    Text(&'a str),
    Epoch(i64),
}

impl<'a> RawDate<'a> {
    /// Classify a JSON value. Returns `None` for shapes that cannot hold a date.
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RawDate::Text(s)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .map(RawDate::Epoch),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for RawDate<'a> {
    fn from(value: &'a str) -> Self {
        RawDate::Text(value)
    }
}

impl From<i64> for RawDate<'_> {
    fn from(value: i64) -> Self {
        RawDate::Epoch(value)
    }
}

/// Converts raw date values to UTC instants.
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    config: NormalizeConfig,
}

impl DateNormalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn normalize<'a>(&self, raw: impl Into<RawDate<'a>>) -> Option<DateTime<Utc>> {
        match raw.into() {
            RawDate::Epoch(value) => self.epoch_instant(value),
            RawDate::Text(text) => self.text_instant(text),
        }
    }

    pub fn normalize_json(&self, value: &Value) -> Option<DateTime<Utc>> {
        match RawDate::from_json(value) {
            Some(raw) => self.normalize(raw),
            None => {
                tracing::debug!(%value, "date value is neither a string nor a number");
                None
            }
        }
    }

    fn epoch_instant(&self, value: i64) -> Option<DateTime<Utc>> {
        if value <= 0 {
            tracing::warn!(value, "non-positive epoch is not a publication date");
            return None;
        }

        let latest = self.config.latest_plausible();

        if let Some(instant) = DateTime::from_timestamp(value, 0) {
            if instant <= latest {
                return Some(instant);
            }
        }

        // Seconds would land in the future: the value is milliseconds.
        if let Some(instant) = DateTime::from_timestamp_millis(value) {
            if instant <= latest {
                tracing::debug!(value, "epoch reinterpreted as milliseconds");
                return Some(instant);
            }
        }

        tracing::warn!(value, "epoch lies in the future as seconds and milliseconds");
        None
    }

    fn text_instant(&self, text: &str) -> Option<DateTime<Utc>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("empty date string");
            return None;
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<i64>() {
                Ok(value) => self.epoch_instant(value),
                Err(err) => {
                    tracing::warn!(input = trimmed, error = %err, "epoch string out of range");
                    None
                }
            };
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }

        match DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(err) => {
                tracing::warn!(input = trimmed, error = %err, "unable to parse date");
                None
            }
        }
    }
}

/// Normalize a JSON date value against the wall clock.
pub fn normalize_date(value: &Value) -> Option<DateTime<Utc>> {
    DateNormalizer::default().normalize_json(value)
}
