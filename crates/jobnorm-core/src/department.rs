use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Canonical department a posting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Ai,
    CustomerSuccessSupport,
    Data,
    Design,
    Marketing,
    ProductManagement,
    Sales,
    Security,
    SoftwareEngineering,
    #[default]
    Unknown,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Ai => "ai",
            Department::CustomerSuccessSupport => "customer_success_support",
            Department::Data => "data",
            Department::Design => "design",
            Department::Marketing => "marketing",
            Department::ProductManagement => "product_management",
            Department::Sales => "sales",
            Department::Security => "security",
            Department::SoftwareEngineering => "software_engineering",
            Department::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Department::Unknown
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    /// Parses the canonical key produced by [`Department::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(Department::Ai),
            "customer_success_support" => Ok(Department::CustomerSuccessSupport),
            "data" => Ok(Department::Data),
            "design" => Ok(Department::Design),
            "marketing" => Ok(Department::Marketing),
            "product_management" => Ok(Department::ProductManagement),
            "sales" => Ok(Department::Sales),
            "security" => Ok(Department::Security),
            "software_engineering" => Ok(Department::SoftwareEngineering),
            "unknown" => Ok(Department::Unknown),
            _ => Err(format!("Unknown department key: {}", s)),
        }
    }
}

static DEPARTMENT_SYNONYMS: OnceLock<HashMap<&'static str, Department>> = OnceLock::new();

fn department_synonyms() -> &'static HashMap<&'static str, Department> {
    DEPARTMENT_SYNONYMS.get_or_init(|| {
        const SYNONYMS: &[(&str, Department)] = &[
            ("ai", Department::Ai),
            ("artificial intelligence", Department::Ai),
            ("machine learning", Department::Ai),
            ("customer success", Department::CustomerSuccessSupport),
            ("customer support", Department::CustomerSuccessSupport),
            ("customer success & support", Department::CustomerSuccessSupport),
            ("customer success and support", Department::CustomerSuccessSupport),
            ("support", Department::CustomerSuccessSupport),
            ("community", Department::CustomerSuccessSupport),
            ("data", Department::Data),
            ("data science", Department::Data),
            ("data engineering", Department::Data),
            ("analytics", Department::Data),
            ("design", Department::Design),
            ("ux", Department::Design),
            ("ui", Department::Design),
            ("product design", Department::Design),
            ("marketing", Department::Marketing),
            ("growth", Department::Marketing),
            ("product management", Department::ProductManagement),
            ("product", Department::ProductManagement),
            ("sales", Department::Sales),
            ("business development", Department::Sales),
            ("security", Department::Security),
            ("information security", Department::Security),
            ("infosec", Department::Security),
            ("software engineering", Department::SoftwareEngineering),
            ("engineering", Department::SoftwareEngineering),
            ("dev", Department::SoftwareEngineering),
            ("development", Department::SoftwareEngineering),
            ("hardware", Department::SoftwareEngineering),
            ("hardware engineering", Department::SoftwareEngineering),
            ("corporate it", Department::SoftwareEngineering),
            ("corporate", Department::SoftwareEngineering),
        ];

        SYNONYMS.iter().copied().collect()
    })
}

/// Map a free-text department label to a [`Department`].
///
/// Matching is exact on the trimmed, lowercased phrase. Anything else is
/// [`Department::Unknown`]; callers keep the raw label alongside.
pub fn classify_department(text: &str) -> Department {
    let key = text.trim().to_lowercase();
    if key.is_empty() {
        return Department::Unknown;
    }

    match department_synonyms().get(key.as_str()) {
        Some(department) => *department,
        None => {
            tracing::debug!(department = text, "unknown department");
            Department::Unknown
        }
    }
}
