//! Helpers for walking provider JSON payloads.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::JobRecord;

/// Parse raw payload bytes into a JSON value.
pub fn parse_payload(payload: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(payload)
        .map_err(|e| AppError::MalformedPayload(format!("invalid JSON: {e}")))
}

/// Follow `path` through nested objects and return the object found there.
///
/// An empty path returns `root` itself. Fails with `MalformedPayload` when a
/// segment is missing or the target is not an object, since adapters use
/// this to locate the job inside its envelope.
pub fn object_at<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Map<String, Value>, AppError> {
    let mut current = root;
    for segment in path {
        current = current.get(segment).ok_or_else(|| {
            AppError::MalformedPayload(format!("missing '{}'", path.join(".")))
        })?;
    }
    current.as_object().ok_or_else(|| {
        AppError::MalformedPayload(format!("'{}' is not an object", display_path(path)))
    })
}

/// Array under `key`. A missing or null field is an empty slice; any other
/// non-array shape is a field error.
pub fn array_at<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a [Value], AppError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(AppError::field(
            key,
            format!("expected array, got {}", kind(other)),
        )),
    }
}

/// Non-blank string under `key`, trimmed.
pub fn str_at<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Strings of an array of strings, skipping anything else.
pub fn strings(items: &[Value]) -> impl Iterator<Item = &str> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Text form of a scalar: strings as-is, numbers and booleans formatted.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Forward an unrecognized field to the record's metadata.
///
/// Strings go through the normal comma-splitting insert; numbers and
/// booleans are stored as text; arrays are forwarded element by element;
/// objects are stored whole as compact JSON. Nulls are dropped.
pub fn add_json_metadata(job: &mut JobRecord, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => job.add_metadata(key, s),
        Value::Number(_) | Value::Bool(_) => {
            if let Some(text) = scalar_text(value) {
                job.add_metadata(key, &text);
            }
        }
        Value::Array(items) => {
            for item in items {
                add_json_metadata(job, key, item);
            }
        }
        Value::Object(_) => job.tags.add_raw(key, &value.to_string()),
    }
}

/// Forward every field of `object` not named in `known` to metadata,
/// under its own key.
pub fn add_unrecognized(job: &mut JobRecord, object: &Map<String, Value>, known: &[&str]) {
    for (key, value) in object {
        if !known.contains(&key.as_str()) {
            add_json_metadata(job, key, value);
        }
    }
}

/// Log a field-level failure and move on. Fatal errors are returned.
pub fn skip_field_error<T>(result: Result<T, AppError>, source: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if !err.is_fatal() => {
            tracing::warn!(source, error = %err, "skipping malformed field");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn display_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
