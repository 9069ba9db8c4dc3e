use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::payload::{
    add_unrecognized, array_at, object_at, parse_payload, scalar_text, skip_field_error, str_at,
};
use jobnorm_core::{
    AppError, DateNormalizer, JobRecord, SourceAdapter, classify_employment_type,
    location_type_keyword,
};
use serde_json::{Map, Value};

use crate::config::AdapterConfig;

pub const SOURCE: &str = "gem";

const BOARD_FIELDS: &[&str] = &[
    "absolute_url",
    "content",
    "departments",
    "employment_type",
    "first_published_at",
    "id",
    "internal_job_id",
    "location",
    "location_type",
    "offices",
    "title",
];

const POSTING_FIELDS: &[&str] = &[
    "companyLogo",
    "companyName",
    "companyUrl",
    "descriptionHtml",
    "extId",
    "firstPublishedTsSec",
    "id",
    "job",
    "jobPostSectionHtml",
    "locations",
    "title",
];

/// Gem job payloads.
///
/// Gem serves two shapes: the public job board listing (snake_case keys,
/// `internal_job_id`) and the GraphQL posting behind hosted pages
/// (camelCase keys, `extId`). The adapter accepts either.
#[derive(Debug, Clone, Default)]
pub struct GemAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl GemAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }

    fn parse_board_job(&self, job: &mut JobRecord, object: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(id) = object.get("internal_job_id").and_then(scalar_text) {
            job.source_id = id;
        }
        if let Some(id) = object.get("id").and_then(scalar_text) {
            job.add_metadata("gem_id", &id);
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
        if let Some(employment) = str_at(object, "employment_type") {
            job.employment_type = classify_employment_type(employment);
        }
        if let Some(published) = object.get("first_published_at") {
            job.set_date_posted(&self.dates, published);
        }

        if let Some(departments) = skip_field_error(array_at(object, "departments"), SOURCE)? {
            for name in departments.iter().filter_map(|d| d.get("name")).filter_map(Value::as_str) {
                // Keep looking until one of them classifies.
                if job.department_raw.is_none() || !job.department.is_known() {
                    job.set_department(name);
                }
                job.add_metadata("department", name);
            }
        }

        if let Some(location) = object.get("location").and_then(Value::as_object) {
            if let Some(name) = str_at(location, "name") {
                job.location = name.to_string();
            }
        }
        if let Some(location_type) = str_at(object, "location_type") {
            job.set_location_type(location_type_keyword(location_type));
        }

        if let Some(offices) = skip_field_error(array_at(object, "offices"), SOURCE)? {
            for office in offices.iter().filter_map(Value::as_object) {
                if let Some(name) = str_at(office, "name") {
                    job.add_metadata("office_location", name);
                }
                if let Some(name) = office
                    .get("location")
                    .and_then(Value::as_object)
                    .and_then(|l| str_at(l, "name"))
                {
                    job.add_metadata("office_location_name", name);
                }
            }
        }

        add_unrecognized(job, object, BOARD_FIELDS);
        Ok(())
    }

    fn parse_posting(&self, job: &mut JobRecord, object: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(id) = str_at(object, "extId") {
            job.source_id = id.to_string();
        }
        if let Some(id) = object.get("id").and_then(scalar_text) {
            job.add_metadata("gem_id", &id);
        }
        if let Some(title) = str_at(object, "title") {
            job.set_title(title);
        }
        if let Some(description) = str_at(object, "descriptionHtml") {
            job.description = description.to_string();
        }
        if let Some(published) = object.get("firstPublishedTsSec") {
            job.set_date_posted(&self.dates, published);
        }

        if let Some(locations) = skip_field_error(array_at(object, "locations"), SOURCE)? {
            for location in locations.iter().filter_map(Value::as_object) {
                if job.location.is_empty() {
                    if let Some(name) = str_at(location, "name") {
                        job.location = name.to_string();
                    }
                }
                add_location_metadata(job, "location", location);
            }
        }

        if let Some(inner) = object.get("job").and_then(Value::as_object) {
            if let Some(location_type) = str_at(inner, "locationType") {
                job.set_location_type(location_type_keyword(location_type));
            }
            if let Some(employment) = str_at(inner, "employmentType") {
                job.employment_type = classify_employment_type(employment);
            }
            if let Some(department) = inner
                .get("department")
                .and_then(Value::as_object)
                .and_then(|d| str_at(d, "name"))
            {
                job.set_department(department);
            }
            if let Some(team) = str_at(inner, "teamDisplayName") {
                job.add_metadata("team_display_name", team);
            }
            if let Some(locations) = skip_field_error(array_at(inner, "locations"), SOURCE)? {
                for location in locations.iter().filter_map(Value::as_object) {
                    if let Some(name) = str_at(location, "name") {
                        job.add_metadata("job_location_name", name);
                    }
                    add_location_metadata(job, "job_location", location);
                }
            }
        }

        if let Some(sections) = skip_field_error(array_at(object, "jobPostSectionHtml"), SOURCE)? {
            for section in sections.iter().filter_map(Value::as_str) {
                job.add_metadata(ALTERNATE_DESCRIPTIONS, section);
            }
        }

        if let Some(name) = str_at(object, "companyName") {
            job.company.set_name(name);
        }
        if let Some(homepage) = str_at(object, "companyUrl") {
            job.company.set_homepage(homepage);
        }
        if let Some(logo) = str_at(object, "companyLogo") {
            job.company.set_logo(logo);
        }

        add_unrecognized(job, object, POSTING_FIELDS);
        Ok(())
    }
}

fn add_location_metadata(job: &mut JobRecord, prefix: &str, location: &Map<String, Value>) {
    if let Some(city) = str_at(location, "city") {
        job.add_metadata(&format!("{prefix}_city"), city);
    }
    if let Some(country) = str_at(location, "isoCountry") {
        job.add_metadata(&format!("{prefix}_country"), country);
    }
    if let Some(remote) = location.get("isRemote").and_then(Value::as_bool) {
        job.add_metadata(&format!("{prefix}_is_remote"), &remote.to_string());
    }
}

/// GraphQL postings carry `extId` / `firstPublishedTsSec`; board listings do not.
fn is_posting_shape(object: &Map<String, Value>) -> bool {
    object.contains_key("extId") || object.contains_key("firstPublishedTsSec")
}

impl SourceAdapter for GemAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let object = object_at(&root, &[])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if is_posting_shape(object) {
            self.parse_posting(&mut job, object)?;
        } else {
            self.parse_board_job(&mut job, object)?;
        }

        if !job.location_type.is_known() && !job.location.is_empty() {
            let location = job.location.clone();
            job.process_location_types(&[location]);
        }

        if job.url.is_empty() {
            if let Some(board) = &self.board {
                if !job.source_id.is_empty() {
                    job.url = format!("https://jobs.gem.com/{board}/{}", job.source_id);
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
