//! Structured location objects rendered to a single display string.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// City / region / postal code / country, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

const CITY_KEYS: &[&str] = &["city", "addressLocality"];
const STATE_KEYS: &[&str] = &["state", "region", "addressRegion"];
const POSTAL_KEYS: &[&str] = &["postalCode", "postal_code", "zip"];
const COUNTRY_KEYS: &[&str] = &["country", "addressCountry"];

impl Address {
    /// Read an address from a provider location object.
    ///
    /// Understands the flat shapes used by BambooHR and Workable as well as
    /// JSON-LD `Place` objects with a nested `address`. Anything that is not
    /// an object yields an empty address.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let mut address = Self {
            city: first_text(object, CITY_KEYS),
            state: first_text(object, STATE_KEYS),
            postal_code: first_text(object, POSTAL_KEYS),
            country: first_text(object, COUNTRY_KEYS),
        };

        if let Some(nested) = object.get("address").filter(|v| v.is_object()) {
            let nested = Self::from_json(nested);
            address.city = address.city.or(nested.city);
            address.state = address.state.or(nested.state);
            address.postal_code = address.postal_code.or(nested.postal_code);
            address.country = address.country.or(nested.country);
        }

        address
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

impl fmt::Display for Address {
    /// `City, State Postal, Country`, skipping whatever is missing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        let parts = [
            (&self.city, ", "),
            (&self.state, ", "),
            (&self.postal_code, " "),
            (&self.country, ", "),
        ];

        for (part, separator) in parts {
            let Some(part) = part.as_deref().map(str::trim).filter(|p| !p.is_empty()) else {
                continue;
            };
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.push_str(part);
        }

        f.write_str(&out)
    }
}

/// First non-empty string under any of `keys`. Country objects such as
/// `{"name": "France"}` are read through their `name`.
fn first_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(|value| match value {
            Value::String(s) => Some(s.as_str()),
            Value::Object(inner) => inner.get("name").and_then(Value::as_str),
            _ => None,
        })
        .map(str::trim)
        .find(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null"))
        .map(str::to_string)
}
