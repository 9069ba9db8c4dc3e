use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::metadata::ALTERNATE_LOCATIONS;
use crate::models::JobRecord;

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Remote,
    Onsite,
    Hybrid,
    #[default]
    Unknown,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Remote => "remote",
            LocationType::Onsite => "onsite",
            LocationType::Hybrid => "hybrid",
            LocationType::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != LocationType::Unknown
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(LocationType::Remote),
            "onsite" => Ok(LocationType::Onsite),
            "hybrid" => Ok(LocationType::Hybrid),
            "unknown" => Ok(LocationType::Unknown),
            _ => Err(format!("Unknown location type key: {}", s)),
        }
    }
}

static LOCATION_KEYWORDS: OnceLock<HashMap<&'static str, LocationType>> = OnceLock::new();

fn location_keywords() -> &'static HashMap<&'static str, LocationType> {
    LOCATION_KEYWORDS.get_or_init(|| {
        const KEYWORDS: &[(&str, LocationType)] = &[
            ("remote", LocationType::Remote),
            ("telecommute", LocationType::Remote),
            ("onsite", LocationType::Onsite),
            ("on-site", LocationType::Onsite),
            ("on_site", LocationType::Onsite),
            ("on site", LocationType::Onsite),
            ("in_office", LocationType::Onsite),
            ("in-office", LocationType::Onsite),
            ("in office", LocationType::Onsite),
            ("hybrid", LocationType::Hybrid),
        ];

        KEYWORDS.iter().copied().collect()
    })
}

/// Substring rules for free-text location names, checked in order.
const LOCATION_FRAGMENTS: &[(&str, LocationType)] = &[
    ("remote", LocationType::Remote),
    ("anywhere", LocationType::Remote),
    ("onsite", LocationType::Onsite),
    ("on-site", LocationType::Onsite),
    ("hybrid", LocationType::Hybrid),
];

/// Exact keyword lookup only (`"remote"`, `"in_office"`, ...).
pub fn location_type_keyword(text: &str) -> LocationType {
    let key = text.trim().to_lowercase();
    location_keywords()
        .get(key.as_str())
        .copied()
        .unwrap_or_default()
}

/// Map free text to a [`LocationType`].
///
/// Tries the exact keyword table first, then falls back to substring rules
/// so that names like `"Remote - Europe"` still classify.
pub fn classify_location_type(text: &str) -> LocationType {
    let key = text.trim().to_lowercase();
    if key.is_empty() {
        return LocationType::Unknown;
    }

    if let Some(location_type) = location_keywords().get(key.as_str()) {
        return *location_type;
    }

    LOCATION_FRAGMENTS
        .iter()
        .find(|(fragment, _)| key.contains(fragment))
        .map(|(_, location_type)| *location_type)
        .unwrap_or_default()
}

impl JobRecord {
    /// Set the location type, raising the remote flag for remote work.
    pub fn set_location_type(&mut self, location_type: LocationType) {
        self.location_type = location_type;
        if location_type == LocationType::Remote {
            self.is_remote = true;
        }
    }

    /// Settle the location type from several location strings.
    ///
    /// Write-once: once the type is known, every string goes to the
    /// alternate locations tag. Otherwise the first classifiable string
    /// decides; strings that do not classify are kept as metadata.
    pub fn process_location_types<S: AsRef<str>>(&mut self, locations: &[S]) {
        let locations = locations
            .iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty());

        if self.location_type.is_known() {
            for location in locations {
                self.add_metadata(ALTERNATE_LOCATIONS, &location);
            }
            return;
        }

        for location in locations {
            let location_type = classify_location_type(&location);
            if location_type.is_known() {
                self.set_location_type(location_type);
                return;
            }

            tracing::debug!(%location, "unclassifiable location");
            self.add_metadata(ALTERNATE_LOCATIONS, &location);
        }
    }
}
