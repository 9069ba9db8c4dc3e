use jobnorm_core::payload::{
    add_unrecognized, array_at, object_at, parse_payload, skip_field_error, str_at, strings,
};
use jobnorm_core::{
    AppError, DateNormalizer, JobRecord, SourceAdapter, classify_employment_type,
};
use serde_json::Value;

use crate::config::AdapterConfig;

pub const SOURCE: &str = "rippling";

const KNOWN_FIELDS: &[&str] = &[
    "board",
    "companyName",
    "createdOn",
    "department",
    "description",
    "employmentType",
    "name",
    "url",
    "uuid",
    "workLocations",
];

/// Rippling ATS job board posting (`/api/v2/board/{board}/jobs/{uuid}`).
#[derive(Debug, Clone, Default)]
pub struct RipplingAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl RipplingAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }
}

impl SourceAdapter for RipplingAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let object = object_at(&root, &[])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if let Some(uuid) = str_at(object, "uuid") {
            job.source_id = uuid.to_string();
        }
        if let Some(name) = str_at(object, "name") {
            job.set_title(name);
        }
        if let Some(url) = str_at(object, "url") {
            job.url = url.to_string();
        }

        if let Some(description) = object.get("description").and_then(Value::as_object) {
            if let Some(role) = str_at(description, "role") {
                job.description = role.to_string();
            }
            if let Some(company) = str_at(description, "company") {
                job.company.set_description(company);
            }
        }

        if let Some(department) = object
            .get("department")
            .and_then(Value::as_object)
            .and_then(|d| str_at(d, "name"))
        {
            job.set_department(department);
        }

        if let Some(label) = object
            .get("employmentType")
            .and_then(Value::as_object)
            .and_then(|e| str_at(e, "label"))
        {
            job.employment_type = classify_employment_type(label);
            if !job.employment_type.is_known() {
                job.process_commitments(&[label]);
            }
        }

        if let Some(created) = object.get("createdOn") {
            job.set_date_posted(&self.dates, created);
        }

        if let Some(locations) = skip_field_error(array_at(object, "workLocations"), SOURCE)? {
            let locations: Vec<&str> = strings(locations).collect();
            if let Some(first) = locations.first() {
                job.location = first.to_string();
            }
            for location in &locations {
                job.tags.add_raw("work_location", location);
            }
            job.process_location_types(&locations);
        }

        if let Some(name) = str_at(object, "companyName") {
            job.company.set_name(name);
        }
        if let Some(board) = object.get("board").and_then(Value::as_object) {
            if let Some(homepage) = str_at(board, "boardURL") {
                job.company.set_homepage(homepage);
            }
            if let Some(logo) = str_at(board, "logo") {
                job.company.set_logo(logo);
            }
        }

        add_unrecognized(&mut job, object, KNOWN_FIELDS);

        if job.url.is_empty() {
            if let Some(board) = &self.board {
                if !job.source_id.is_empty() {
                    job.url = format!("https://ats.rippling.com/{board}/jobs/{}", job.source_id);
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
