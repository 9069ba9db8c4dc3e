use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AppError;

/// Settings shared by the parsers.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Fixed "now" for date plausibility checks. Wall clock when `None`.
    pub reference_time: Option<DateTime<Utc>>,
    /// Clock skew allowed before an epoch counts as lying in the future.
    pub future_tolerance: TimeDelta,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            reference_time: None,
            future_tolerance: TimeDelta::zero(),
        }
    }
}

impl NormalizeConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JOBNORM_FUTURE_TOLERANCE_SECS` (optional, defaults to 0)
    pub fn from_env() -> Result<Self, AppError> {
        let future_tolerance = match std::env::var("JOBNORM_FUTURE_TOLERANCE_SECS") {
            Err(_) => TimeDelta::zero(),
            Ok(raw) => parse_tolerance(&raw)?,
        };

        Ok(Self {
            reference_time: None,
            future_tolerance,
        })
    }

    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    pub fn with_future_tolerance(mut self, tolerance: TimeDelta) -> Self {
        self.future_tolerance = tolerance;
        self
    }

    /// Latest instant still accepted as a plausible publication time.
    pub fn latest_plausible(&self) -> DateTime<Utc> {
        let now = self.reference_time.unwrap_or_else(Utc::now);
        now.checked_add_signed(self.future_tolerance)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

fn parse_tolerance(raw: &str) -> Result<TimeDelta, AppError> {
    let secs: i64 = raw.trim().parse().map_err(|_| {
        AppError::ConfigError(format!(
            "Invalid JOBNORM_FUTURE_TOLERANCE_SECS '{raw}': must be a non-negative integer"
        ))
    })?;
    if secs < 0 {
        return Err(AppError::ConfigError(
            "JOBNORM_FUTURE_TOLERANCE_SECS must not be negative".into(),
        ));
    }
    TimeDelta::try_seconds(secs).ok_or_else(|| {
        AppError::ConfigError(format!(
            "JOBNORM_FUTURE_TOLERANCE_SECS '{raw}' is out of range"
        ))
    })
}
