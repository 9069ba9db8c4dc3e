use jobnorm_core::payload::{
    add_unrecognized, object_at, parse_payload, scalar_text, str_at,
};
use jobnorm_core::{
    Address, AppError, DateNormalizer, JobRecord, LocationType, SourceAdapter,
    classify_employment_type, parse_compensation,
};
use crate::config::AdapterConfig;

pub const SOURCE: &str = "bamboo";

const KNOWN_FIELDS: &[&str] = &[
    "atsLocation",
    "compensation",
    "datePosted",
    "departmentLabel",
    "description",
    "employmentStatusLabel",
    "jobOpeningName",
    "jobOpeningShareUrl",
    "location",
    "locationType",
];

/// BambooHR careers page job detail (`result.jobOpening`).
#[derive(Debug, Clone, Default)]
pub struct BambooAdapter {
    dates: DateNormalizer,
}

impl BambooAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            dates: config.date_normalizer(),
        }
    }
}

/// BambooHR encodes the workplace as a numeric code.
fn location_type_code(code: &str) -> LocationType {
    match code {
        "0" => LocationType::Onsite,
        "1" => LocationType::Remote,
        "2" => LocationType::Hybrid,
        _ => LocationType::Unknown,
    }
}

/// The share URL ends in the opening's numeric id.
fn id_from_share_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
}

impl SourceAdapter for BambooAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError> {
        let root = parse_payload(payload)?;
        let opening = object_at(&root, &["result", "jobOpening"])?;
        let mut job = JobRecord::new(SOURCE, payload);

        if let Some(share_url) = str_at(opening, "jobOpeningShareUrl") {
            // Some boards double-escape the slashes.
            let url = share_url.replace("\\/", "/");
            if let Some(id) = id_from_share_url(&url) {
                job.source_id = id.to_string();
            }
            job.url = url;
        }
        if let Some(title) = str_at(opening, "jobOpeningName") {
            job.set_title(title);
        }
        if let Some(department) = str_at(opening, "departmentLabel") {
            job.set_department(department);
        }
        if let Some(status) = str_at(opening, "employmentStatusLabel") {
            job.employment_type = classify_employment_type(status);
        }
        if let Some(description) = str_at(opening, "description") {
            job.description = description.to_string();
        }
        if let Some(posted) = opening.get("datePosted") {
            job.set_date_posted(&self.dates, posted);
        }

        if let Some(summary) = str_at(opening, "compensation") {
            let compensation = parse_compensation(summary);
            if !compensation.parsed {
                tracing::warn!(source = SOURCE, summary, "unable to parse compensation");
            }
            job.apply_compensation(&compensation);
            job.tags.add_raw("compensation", summary);
        }

        if let Some(code) = opening.get("locationType").and_then(scalar_text) {
            job.set_location_type(location_type_code(code.trim()));
        }

        for key in ["location", "atsLocation"] {
            let Some(value) = opening.get(key).filter(|v| !v.is_null()) else {
                continue;
            };
            let address = Address::from_json(value);
            if address.is_empty() {
                tracing::debug!(source = SOURCE, field = key, "empty location object");
                continue;
            }
            let display = address.to_string();
            if job.location.is_empty() {
                job.location = display.clone();
            }
            job.tags.add_raw(key, &display);
        }

        add_unrecognized(&mut job, opening, KNOWN_FIELDS);

        tracing::debug!(
            source = SOURCE,
            source_id = %job.source_id,
            title = %job.title,
            "parsed job"
        );
        Ok(job)
    }
}
