use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::payload::{
    add_unrecognized, array_at, object_at, parse_payload, skip_field_error, str_at, strings,
};
use jobnorm_core::{
    AppError, DateNormalizer, JobRecord, SourceAdapter, classify_employment_type,
    location_type_keyword,
};
use serde_json::{Map, Value};

use crate::config::AdapterConfig;

pub const SOURCE: &str = "lever";

const KNOWN_FIELDS: &[&str] = &[
    "categories",
    "country",
    "createdAt",
    "description",
    "descriptionPlain",
    "hostedUrl",
    "id",
    "lists",
    "salaryRange",
    "text",
    "workplaceType",
];

/// Lever postings API job (`/v0/postings/{board}/{id}`).
#[derive(Debug, Clone, Default)]
pub struct LeverAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl LeverAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }
}

/// `categories`: commitment, location, department, team, allLocations.
/// Returns every location string seen, primary first.
fn apply_categories(job: &mut JobRecord, categories: &Map<String, Value>) -> Result<Vec<String>, AppError> {
    if let Some(commitment) = str_at(categories, "commitment") {
        job.employment_type = classify_employment_type(commitment);
        if !job.employment_type.is_known() {
            job.process_commitments(&[commitment]);
        }
        job.add_metadata("commitment_raw", commitment);
    }

    let mut locations = Vec::new();
    if let Some(location) = str_at(categories, "location") {
        job.location = location.to_string();
        job.tags.add_raw("location_raw", location);
        locations.push(location.to_string());
    }

    if let Some(department) = str_at(categories, "department") {
        job.set_department(department);
    }
    if let Some(team) = str_at(categories, "team") {
        job.add_metadata("team", team);
    }

    if let Some(all) = skip_field_error(array_at(categories, "allLocations"), SOURCE)? {
        for location in strings(all) {
            job.tags.add_raw("secondary_location", location);
            if !locations.iter().any(|l| l == location) {
                locations.push(location.to_string());
            }
        }
    }

    Ok(locations)
}

/// `salaryRange`: `{currency, interval, min, max}`.
fn apply_salary_range(job: &mut JobRecord, range: &Map<String, Value>) {
    if let Some(min) = range.get("min").and_then(Value::as_f64) {
        job.min_compensation = min;
    }
    if let Some(max) = range.get("max").and_then(Value::as_f64) {
        job.max_compensation = max;
    }
    if let Some(currency) = str_at(range, "currency") {
        job.compensation_unit = Some(currency.to_string());
    }
    if let Some(interval) = str_at(range, "interval") {
        job.add_metadata("compensation_interval", interval);
    }
}

impl SourceAdapter for LeverAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let object = object_at(&root, &[])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if let Some(id) = str_at(object, "id") {
            job.source_id = id.to_string();
        }
        if let Some(title) = str_at(object, "text") {
            job.set_title(title);
        }
        if let Some(url) = str_at(object, "hostedUrl") {
            job.url = url.to_string();
        }
        if let Some(description) = str_at(object, "descriptionPlain") {
            job.description = description.to_string();
        }
        if let Some(html) = str_at(object, "description") {
            job.add_metadata(ALTERNATE_DESCRIPTIONS, html);
        }
        // Milliseconds since the epoch.
        if let Some(created) = object.get("createdAt") {
            job.set_date_posted(&self.dates, created);
        }
        if let Some(country) = str_at(object, "country") {
            job.add_metadata("country", country);
        }

        let mut locations = Vec::new();
        match object.get("categories") {
            Some(Value::Object(categories)) => {
                locations = apply_categories(&mut job, categories)?;
            }
            Some(Value::Null) | None => {}
            Some(_) => tracing::warn!(source = SOURCE, "categories is not an object"),
        }

        // on-site, remote, hybrid or unspecified.
        if let Some(workplace) = str_at(object, "workplaceType") {
            job.set_location_type(location_type_keyword(workplace));
        }
        if !job.location_type.is_known() {
            job.process_location_types(&locations);
        }

        if let Some(range) = object.get("salaryRange").and_then(Value::as_object) {
            apply_salary_range(&mut job, range);
        }

        if let Some(lists) = skip_field_error(array_at(object, "lists"), SOURCE)? {
            for list in lists.iter().filter_map(Value::as_object) {
                let (Some(name), Some(content)) = (str_at(list, "text"), str_at(list, "content"))
                else {
                    tracing::debug!(source = SOURCE, "list without text or content");
                    continue;
                };
                job.tags.add_raw(&format!("list_{name}"), content);
            }
        }

        add_unrecognized(&mut job, object, KNOWN_FIELDS);

        if job.url.is_empty() {
            if let Some(board) = &self.board {
                if !job.source_id.is_empty() {
                    job.url = format!("https://jobs.lever.co/{board}/{}", job.source_id);
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
