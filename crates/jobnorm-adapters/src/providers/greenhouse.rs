use jobnorm_core::payload::{
    add_json_metadata, add_unrecognized, array_at, object_at, parse_payload, scalar_text,
    skip_field_error, str_at,
};
use jobnorm_core::{
    AppError, DateNormalizer, JobRecord, SourceAdapter, classify_department,
    location_type_keyword,
};
use serde_json::{Map, Value};

use crate::config::AdapterConfig;

pub const SOURCE: &str = "greenhouse";

const KNOWN_FIELDS: &[&str] = &[
    "absolute_url",
    "company_name",
    "content",
    "departments",
    "first_published",
    "id",
    "location",
    "metadata",
    "offices",
    "pay_input_ranges",
    "title",
];

/// Greenhouse job board API job (`/boards/{board}/jobs/{id}?pay_transparency=true`).
#[derive(Debug, Clone, Default)]
pub struct GreenhouseAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl GreenhouseAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }
}

/// Custom fields: `[{id, name, value, value_type}]`. Each is stored under its
/// name, or its id when unnamed. Returns the values of commitment-like fields.
fn apply_custom_fields(job: &mut JobRecord, fields: &[Value]) -> Vec<String> {
    let mut commitments = Vec::new();

    for field in fields.iter().filter_map(Value::as_object) {
        let key = str_at(field, "name")
            .map(str::to_string)
            .or_else(|| field.get("id").and_then(scalar_text));
        let Some(key) = key else {
            tracing::debug!(source = SOURCE, "custom field without name or id");
            continue;
        };
        let Some(value) = field.get("value").filter(|v| !v.is_null()) else {
            continue;
        };

        let lowered = key.to_lowercase();
        if lowered.contains("employment type") || lowered.contains("commitment") {
            match value {
                Value::Array(items) => {
                    commitments.extend(items.iter().filter_map(Value::as_str).map(str::to_string))
                }
                other => commitments.extend(scalar_text(other)),
            }
        }

        add_json_metadata(job, &key, value);
    }

    commitments
}

/// First pay range only; amounts are in cents.
fn apply_pay_range(job: &mut JobRecord, range: &Map<String, Value>) {
    let cents = |key: &str| range.get(key).and_then(Value::as_f64);

    if let Some(min) = cents("min_cents") {
        job.min_compensation = min / 100.0;
    }
    if let Some(max) = cents("max_cents") {
        job.max_compensation = max / 100.0;
    }
    if job.max_compensation == 0.0 {
        job.max_compensation = job.min_compensation;
    }
    if let Some(currency) = str_at(range, "currency_type") {
        job.compensation_unit = Some(currency.to_string());
    }
    if let Some(title) = str_at(range, "title") {
        job.add_metadata("pay_range_title", title);
    }
}

impl SourceAdapter for GreenhouseAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let object = object_at(&root, &[])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if let Some(id) = object.get("id").and_then(scalar_text) {
            job.source_id = id;
        }
        if let Some(url) = str_at(object, "absolute_url") {
            job.url = url.to_string();
        }
        if let Some(title) = str_at(object, "title") {
            job.set_title(title);
        }
        if let Some(content) = str_at(object, "content") {
            job.description = content.to_string();
        }
        if let Some(name) = str_at(object, "company_name") {
            job.company.set_name(name);
        }
        if let Some(published) = object.get("first_published") {
            job.set_date_posted(&self.dates, published);
        }

        if let Some(location) = object.get("location").and_then(Value::as_object) {
            if let Some(name) = str_at(location, "name") {
                job.location = name.to_string();
                let location_type = location_type_keyword(name);
                if location_type.is_known() {
                    job.set_location_type(location_type);
                } else {
                    job.process_location_types(&[name]);
                }
            }
        }

        // The first department is the raw label; later ones only help
        // while the classification is still unknown.
        if let Some(departments) = skip_field_error(array_at(object, "departments"), SOURCE)? {
            for name in departments.iter().filter_map(|d| d.get("name")).filter_map(Value::as_str) {
                if job.department_raw.is_none() {
                    job.set_department(name);
                } else if !job.department.is_known() {
                    job.department = classify_department(name);
                }
                job.add_metadata("department", name);
            }
        }

        if let Some(offices) = skip_field_error(array_at(object, "offices"), SOURCE)? {
            for office in offices.iter().filter_map(Value::as_object) {
                if let Some(name) = str_at(office, "name") {
                    job.add_metadata("office", name);
                }
                if let Some(location) = str_at(office, "location") {
                    job.add_metadata("office_location", location);
                }
            }
        }

        if let Some(ranges) = skip_field_error(array_at(object, "pay_input_ranges"), SOURCE)? {
            if let Some(range) = ranges.first().and_then(Value::as_object) {
                apply_pay_range(&mut job, range);
            }
            for range in ranges.iter().skip(1) {
                add_json_metadata(&mut job, "pay_input_ranges", range);
            }
        }

        let mut commitments = Vec::new();
        if let Some(fields) = skip_field_error(array_at(object, "metadata"), SOURCE)? {
            commitments = apply_custom_fields(&mut job, fields);
        }
        if !job.employment_type.is_known() {
            job.process_commitments(&commitments);
        }

        add_unrecognized(&mut job, object, KNOWN_FIELDS);

        if job.url.is_empty() {
            if let Some(board) = &self.board {
                if !job.source_id.is_empty() {
                    job.url = format!(
                        "https://job-boards.greenhouse.io/{board}/jobs/{}",
                        job.source_id
                    );
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
