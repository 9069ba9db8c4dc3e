//! Lossless key → multi-value side channel for anything the classifiers
//! could not map onto a structured field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key whose values are stored verbatim instead of being split on commas.
pub const ALTERNATE_DESCRIPTIONS: &str = "alternate_descriptions";

/// Location strings seen after the location type was already decided.
pub const ALTERNATE_LOCATIONS: &str = "alternate_locations";

/// Commitment labels seen after the employment type was already decided.
pub const ALTERNATE_COMMITMENTS: &str = "alternate_commitments";

/// Ordered, deduplicated multi-value tags keyed by name.
///
/// Within a key, values keep first-seen order and each value appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataTags {
    tags: BTreeMap<String, Vec<String>>,
}

impl MetadataTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under `key`.
    ///
    /// Empty keys or values are ignored. Values are split on commas and each
    /// trimmed part stored separately, except under [`ALTERNATE_DESCRIPTIONS`]
    /// where the value is kept whole.
    pub fn add(&mut self, key: &str, value: &str) {
        if key.is_empty() || value.is_empty() {
            return;
        }

        if key == ALTERNATE_DESCRIPTIONS {
            self.push(key, std::iter::once(value));
        } else {
            self.push(
                key,
                value.split(',').map(str::trim).filter(|part| !part.is_empty()),
            );
        }
    }

    /// Add a value under `key` without comma splitting.
    ///
    /// Used for structured payload fragments (serialized JSON objects) whose
    /// commas are syntax rather than list separators.
    pub fn add_raw(&mut self, key: &str, value: &str) {
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.push(key, std::iter::once(value));
    }

    /// Values stored under `key`, in insertion order. Empty if none.
    pub fn get(&self, key: &str) -> &[String] {
        self.tags.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.get(key).iter().any(|v| v == value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn push<'a>(&mut self, key: &str, values: impl Iterator<Item = &'a str>) {
        let entry = self.tags.entry(key.to_string()).or_default();
        for value in values {
            if !entry.iter().any(|existing| existing == value) {
                entry.push(value.to_string());
            }
        }
        if entry.is_empty() {
            self.tags.remove(key);
        }
    }
}
