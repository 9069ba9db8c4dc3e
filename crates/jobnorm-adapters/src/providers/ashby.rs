use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::payload::{
    add_json_metadata, add_unrecognized, array_at, object_at, parse_payload, skip_field_error,
    str_at, strings,
};
use jobnorm_core::{
    Address, AppError, DateNormalizer, JobRecord, SourceAdapter, classify_employment_type,
    location_type_keyword, parse_compensation,
};
use serde_json::{Map, Value};

use crate::config::AdapterConfig;

pub const SOURCE: &str = "ashby";

const KNOWN_FIELDS: &[&str] = &[
    "compensationPhilosophyHtml",
    "compensationTierSummary",
    "departmentName",
    "descriptionHtml",
    "employmentType",
    "id",
    "linkedData",
    "locationName",
    "publishedDate",
    "secondaryLocationNames",
    "teamNames",
    "title",
    "workplaceType",
];

/// Ashby job posting, as returned by the `ApiJobPosting` GraphQL query
/// (`data.jobPosting`).
#[derive(Debug, Clone, Default)]
pub struct AshbyAdapter {
    board: Option<String>,
    dates: DateNormalizer,
}

impl AshbyAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
            board: config.board,
        }
    }

    fn apply_linked_data(&self, job: &mut JobRecord, linked: &Map<String, Value>) {
        for (key, value) in linked {
            match key.as_str() {
                "title" => {
                    if job.title.is_empty() {
                        if let Some(title) = value.as_str() {
                            tracing::debug!(title, "title taken from linked data");
                            job.set_title(title);
                        }
                    }
                }
                "hiringOrganization" => {
                    let Some(org) = value.as_object() else {
                        continue;
                    };
                    if let Some(name) = str_at(org, "name") {
                        job.company.set_name(name);
                    }
                    if let Some(homepage) = str_at(org, "sameAs") {
                        job.company.set_homepage(homepage);
                    }
                    if let Some(logo) = str_at(org, "logo") {
                        job.company.set_logo(logo);
                    }
                }
                "jobLocation" => {
                    let address = Address::from_json(value);
                    if address.is_empty() {
                        continue;
                    }
                    let display = address.to_string();
                    if job.location.is_empty() {
                        job.location = display.clone();
                    }
                    job.tags.add_raw("linked_data_location", &display);
                }
                _ => add_json_metadata(job, &format!("linked_data_{key}"), value),
            }
        }
    }
}

impl SourceAdapter for AshbyAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let posting = object_at(&root, &["data", "jobPosting"])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if let Some(id) = str_at(posting, "id") {
            job.source_id = id.to_string();
        }
        if let Some(title) = str_at(posting, "title") {
            job.set_title(title);
        }
        if let Some(description) = str_at(posting, "descriptionHtml") {
            job.description = description.to_string();
        }
        if let Some(department) = str_at(posting, "departmentName") {
            job.set_department(department);
        }
        if let Some(employment) = str_at(posting, "employmentType") {
            job.employment_type = classify_employment_type(employment);
        }
        if let Some(location) = str_at(posting, "locationName") {
            job.location = location.to_string();
        }

        // REMOTE, HYBRID or ONSITE; the location name is the fallback signal.
        if let Some(workplace) = str_at(posting, "workplaceType") {
            job.set_location_type(location_type_keyword(workplace));
        }
        if !job.location_type.is_known() && !job.location.is_empty() {
            let location = job.location.clone();
            job.process_location_types(&[location]);
        }

        if let Some(summary) = str_at(posting, "compensationTierSummary") {
            let compensation = parse_compensation(summary);
            if !compensation.parsed {
                tracing::warn!(source = SOURCE, summary, "unable to parse compensation");
            }
            job.apply_compensation(&compensation);
        }

        if let Some(published) = posting.get("publishedDate") {
            job.set_date_posted(&self.dates, published);
        }

        if let Some(locations) = skip_field_error(array_at(posting, "secondaryLocationNames"), SOURCE)? {
            for location in strings(locations) {
                job.add_metadata("secondary_location", location);
            }
        }
        if let Some(teams) = skip_field_error(array_at(posting, "teamNames"), SOURCE)? {
            for team in strings(teams) {
                job.add_metadata("team", team);
            }
        }
        if let Some(philosophy) = str_at(posting, "compensationPhilosophyHtml") {
            job.add_metadata(ALTERNATE_DESCRIPTIONS, philosophy);
        }

        match posting.get("linkedData") {
            Some(Value::Object(linked)) => self.apply_linked_data(&mut job, linked),
            Some(Value::Null) | None => {}
            Some(other) => tracing::warn!(
                source = SOURCE,
                value = %other,
                "linkedData is not an object"
            ),
        }

        add_unrecognized(&mut job, posting, KNOWN_FIELDS);

        if let Some(board) = &self.board {
            if !job.source_id.is_empty() {
                job.url = format!("https://jobs.ashbyhq.com/{board}/{}", job.source_id);
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
