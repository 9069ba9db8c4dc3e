use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use url::Url;

use crate::compensation::Compensation;
use crate::date::DateNormalizer;
use crate::department::{Department, classify_department};
use crate::employment::EmploymentType;
use crate::location::LocationType;
use crate::metadata::MetadataTags;

/// Whether a posting includes equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equity {
    Offered,
    NotOffered,
    #[default]
    Unknown,
}

impl Equity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equity::Offered => "offered",
            Equity::NotOffered => "not_offered",
            Equity::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Equity::Unknown
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Equity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offered" => Ok(Equity::Offered),
            "not_offered" => Ok(Equity::NotOffered),
            "unknown" => Ok(Equity::Unknown),
            _ => Err(format!("Unknown equity key: {}", s)),
        }
    }
}

/// Hiring company, filled from whichever provider field exposes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub homepage_url: Option<Url>,
    pub logo_url: Option<Url>,
    pub description: Option<String>,
}

impl Company {
    pub fn set_name(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
    }

    pub fn set_homepage(&mut self, raw: &str) {
        if let Some(url) = parse_company_url("homepage_url", raw) {
            self.homepage_url = Some(url);
        }
    }

    pub fn set_logo(&mut self, raw: &str) {
        if let Some(url) = parse_company_url("logo_url", raw) {
            self.logo_url = Some(url);
        }
    }

    pub fn set_description(&mut self, description: &str) {
        let description = description.trim();
        if !description.is_empty() {
            self.description = Some(description.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.homepage_url.is_none()
            && self.logo_url.is_none()
            && self.description.is_none()
    }
}

fn parse_company_url(field: &str, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(field, input = raw, error = %err, "dropping invalid company url");
            None
        }
    }
}

/// The canonical job posting every provider payload is reduced to.
///
/// Built by one adapter during one parse and returned as finished output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub source: String,
    pub source_id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub department: Department,
    pub department_raw: Option<String>,
    pub employment_type: EmploymentType,
    pub equity: Equity,
    pub is_remote: bool,
    pub location: String,
    pub location_type: LocationType,
    pub min_compensation: f64,
    pub max_compensation: f64,
    pub compensation_unit: Option<String>,
    pub date_posted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub tags: MetadataTags,
    /// SHA-256 of the raw payload, for change detection downstream.
    pub source_hash: String,
    #[serde(skip)]
    source_data: Vec<u8>,
}

impl JobRecord {
    /// Start an empty record for `source`, keeping the raw payload.
    pub fn new(source: &str, payload: &[u8]) -> Self {
        Self {
            source: source.to_string(),
            source_hash: compute_hash(payload),
            source_data: payload.to_vec(),
            ..Self::default()
        }
    }

    /// Raw payload the record was built from. Empty after deserialization.
    pub fn source_data(&self) -> &[u8] {
        &self.source_data
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.tags.add(key, value);
    }

    pub fn metadata(&self, key: &str) -> &[String] {
        self.tags.get(key)
    }

    /// Keep the raw label and classify it.
    ///
    /// Blank labels are ignored so that a later, better field can still
    /// fill the department.
    pub fn set_department(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        self.department_raw = Some(raw.to_string());
        self.department = classify_department(raw);
    }

    /// Copy a parsed compensation summary onto the record.
    ///
    /// Amounts and currency are only taken when the summary parsed; the
    /// equity flag is taken either way.
    pub fn apply_compensation(&mut self, compensation: &Compensation) {
        if compensation.offers_equity {
            self.equity = Equity::Offered;
        }
        if !compensation.parsed {
            return;
        }
        self.min_compensation = compensation.min_salary;
        self.max_compensation = compensation.max_salary;
        if !compensation.currency.is_empty() {
            self.compensation_unit = Some(compensation.currency.clone());
        }
    }

    /// Set the posting date if `raw` normalizes; otherwise leave it as is.
    pub fn set_date_posted(&mut self, normalizer: &DateNormalizer, raw: &Value) {
        if let Some(instant) = normalizer.normalize_json(raw) {
            self.date_posted = Some(instant);
        }
    }

    /// Set the title unless `title` is blank.
    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        if !title.is_empty() {
            self.title = title.to_string();
        }
    }
}

/// Compute a SHA-256 hash of raw bytes, returned as 64-char hex.
pub fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
