use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::metadata::ALTERNATE_COMMITMENTS;
use crate::models::JobRecord;

/// Canonical employment commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    #[default]
    Unknown,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
            EmploymentType::Temporary => "temporary",
            EmploymentType::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != EmploymentType::Unknown
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full_time" => Ok(EmploymentType::FullTime),
            "part_time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "internship" => Ok(EmploymentType::Internship),
            "temporary" => Ok(EmploymentType::Temporary),
            "unknown" => Ok(EmploymentType::Unknown),
            _ => Err(format!("Unknown employment type key: {}", s)),
        }
    }
}

static EMPLOYMENT_SYNONYMS: OnceLock<HashMap<&'static str, EmploymentType>> = OnceLock::new();

fn employment_synonyms() -> &'static HashMap<&'static str, EmploymentType> {
    EMPLOYMENT_SYNONYMS.get_or_init(|| {
        const SYNONYMS: &[(&str, EmploymentType)] = &[
            ("full_time", EmploymentType::FullTime),
            ("full time", EmploymentType::FullTime),
            ("full-time", EmploymentType::FullTime),
            ("fulltime", EmploymentType::FullTime),
            ("hourly_ft", EmploymentType::FullTime),
            ("salaried_ft", EmploymentType::FullTime),
            ("part_time", EmploymentType::PartTime),
            ("part time", EmploymentType::PartTime),
            ("part-time", EmploymentType::PartTime),
            ("parttime", EmploymentType::PartTime),
            ("hourly_pt", EmploymentType::PartTime),
            ("contract", EmploymentType::Contract),
            ("contractor", EmploymentType::Contract),
            ("internship", EmploymentType::Internship),
            ("intern", EmploymentType::Internship),
            ("temporary", EmploymentType::Temporary),
            ("temp", EmploymentType::Temporary),
        ];

        SYNONYMS.iter().copied().collect()
    })
}

/// Map a single employment label to an [`EmploymentType`], or `Unknown`.
pub fn classify_employment_type(text: &str) -> EmploymentType {
    let key = text.trim().to_lowercase();
    if key.is_empty() {
        return EmploymentType::Unknown;
    }

    match employment_synonyms().get(key.as_str()) {
        Some(employment_type) => *employment_type,
        None => {
            tracing::debug!(employment_type = text, "unknown employment type");
            EmploymentType::Unknown
        }
    }
}

fn commitment_type(commitment: &str) -> Option<EmploymentType> {
    if commitment.contains("part-time") || commitment.contains("part time") {
        return Some(EmploymentType::PartTime);
    }
    if commitment.contains("contract") || commitment.contains("term") {
        return Some(EmploymentType::Contract);
    }
    None
}

impl JobRecord {
    /// Settle the employment type from a list of alternative commitment labels.
    ///
    /// Write-once: if a type is already set, every label is kept as an
    /// alternate commitment instead. Otherwise the first part-time or
    /// contract label decides, and no recognizable label means full time.
    pub fn process_commitments<S: AsRef<str>>(&mut self, commitments: &[S]) {
        let commitments: Vec<String> = commitments
            .iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        if self.employment_type.is_known() {
            tracing::debug!(
                employment_type = %self.employment_type,
                count = commitments.len(),
                "employment type already set, keeping commitments as metadata"
            );
            for commitment in &commitments {
                self.add_metadata(ALTERNATE_COMMITMENTS, commitment);
            }
            return;
        }

        self.employment_type = commitments
            .iter()
            .find_map(|c| commitment_type(c))
            .unwrap_or(EmploymentType::FullTime);
    }
}
