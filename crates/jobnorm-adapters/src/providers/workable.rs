use jobnorm_core::payload::{
    add_unrecognized, array_at, object_at, parse_payload, scalar_text, skip_field_error, str_at,
    strings,
};
use jobnorm_core::{
    Address, AppError, DateNormalizer, JobRecord, LocationType, SourceAdapter,
    classify_department, classify_employment_type, location_type_keyword,
};
use serde_json::Value;

use crate::config::AdapterConfig;

pub const SOURCE: &str = "workable";

const KNOWN_FIELDS: &[&str] = &[
    "department",
    "description",
    "id",
    "location",
    "locations",
    "published",
    "remote",
    "shortcode",
    "title",
    "type",
    "url",
    "workplace",
];

/// Workable widget API job (`/api/v2/accounts/{board}/jobs/{shortcode}`).
#[derive(Debug, Clone, Default)]
pub struct WorkableAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl WorkableAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }
}

impl SourceAdapter for WorkableAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let object = object_at(&root, &[])?;
        let mut job = JobRecord::new(SOURCE, payload);

        // Shortcodes that look numeric are sometimes sent as numbers.
        if let Some(shortcode) = object.get("shortcode").and_then(scalar_text) {
            job.source_id = shortcode;
        }
        if let Some(id) = object.get("id").and_then(scalar_text) {
            job.add_metadata("workable_id", &id);
        }
        if let Some(title) = str_at(object, "title") {
            job.set_title(title);
        }
        if let Some(url) = str_at(object, "url") {
            job.url = url.to_string();
        }
        if let Some(description) = str_at(object, "description") {
            job.description = description.to_string();
        }
        if let Some(kind) = str_at(object, "type") {
            job.employment_type = classify_employment_type(kind);
        }
        if let Some(published) = object.get("published") {
            job.set_date_posted(&self.dates, published);
        }

        // on_site, hybrid or remote.
        if let Some(workplace) = str_at(object, "workplace") {
            job.set_location_type(location_type_keyword(workplace));
        }
        if let Some(remote) = object.get("remote").and_then(Value::as_bool) {
            // Only ever raises the flag; a Remote workplace keeps it set.
            if remote {
                job.is_remote = true;
                if !job.location_type.is_known() {
                    job.set_location_type(LocationType::Remote);
                }
            }
        }

        let mut addresses = Vec::new();
        if let Some(location) = object.get("location").filter(|v| v.is_object()) {
            addresses.push(Address::from_json(location));
        }
        if let Some(locations) = skip_field_error(array_at(object, "locations"), SOURCE)? {
            addresses.extend(locations.iter().map(Address::from_json));
        }
        for address in addresses.iter().filter(|a| !a.is_empty()) {
            let display = address.to_string();
            if job.location.is_empty() {
                job.location = display.clone();
            }
            job.tags.add_raw("parsed_location", &display);
        }

        if let Some(departments) = skip_field_error(array_at(object, "department"), SOURCE)? {
            for department in strings(departments) {
                if job.department_raw.is_none() {
                    job.set_department(department);
                } else if !job.department.is_known() {
                    job.department = classify_department(department);
                }
                job.add_metadata("parsed_department", department);
            }
        }

        add_unrecognized(&mut job, object, KNOWN_FIELDS);

        if job.url.is_empty() {
            if let Some(board) = &self.board {
                if !job.source_id.is_empty() {
                    job.url = format!("https://apply.workable.com/{board}/j/{}", job.source_id);
                }
            }
        }

        tracing::debug!(
            source = SOURCE,
            source_id = %job.source_id,
            title = %job.title,
            "parsed job"
        );
        Ok(job)
    }
}
