use chrono::{TimeZone, Utc};
use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::{Department, EmploymentType, Equity, LocationType};

use crate::integration::common::{ASHBY_JOB, parse_fixture, roundtrip};

#[test]
fn parses_ashby_posting() -> anyhow::Result<()> {
    let job = parse_fixture("ashby", ASHBY_JOB)?;

    assert_eq!(job.source, "ashby");
    assert_eq!(job.source_id, "6765ef2e-7905-4fbc-b941-783049e7835f");
    assert_eq!(job.title, "Principal Product Engineer, EU");
    assert_eq!(job.department, Department::SoftwareEngineering);
    assert_eq!(job.department_raw.as_deref(), Some("Engineering"));
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.location, "Remote - Europe");
    assert_eq!(job.location_type, LocationType::Remote);
    assert!(job.is_remote);
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 5, 12, 0, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn ashby_compensation_and_equity() -> anyhow::Result<()> {
    let job = parse_fixture("ashby", ASHBY_JOB)?;

    assert_eq!(job.compensation_unit.as_deref(), Some("€"));
    assert_eq!(job.min_compensation, 185_000.0);
    assert_eq!(job.max_compensation, 317_000.0);
    assert_eq!(job.equity, Equity::Offered);
    Ok(())
}

#[test]
fn ashby_company_from_linked_data() -> anyhow::Result<()> {
    let job = parse_fixture("ashby", ASHBY_JOB)?;

    assert_eq!(job.company.name, "Ashby");
    assert_eq!(
        job.company.homepage_url.as_ref().map(|u| u.as_str()),
        Some("https://www.ashbyhq.com/")
    );
    assert_eq!(
        job.company.logo_url.as_ref().map(|u| u.as_str()),
        Some("https://www.ashbyhq.com/logo.png")
    );
    Ok(())
}

#[test]
fn ashby_metadata_is_preserved() -> anyhow::Result<()> {
    let job = parse_fixture("ashby", ASHBY_JOB)?;

    for location in ["Barcelona", "Belgium", "France", "Netherlands", "Madrid"] {
        assert!(
            job.tags.contains("secondary_location", location),
            "missing {location}"
        );
    }
    assert_eq!(job.metadata("team"), ["Engineering", "Product Engineering"]);
    assert_eq!(
        job.metadata("linked_data_location"),
        ["Amsterdam, North Holland, Netherlands"]
    );
    assert_eq!(job.metadata("linked_data_jobLocationType"), ["TELECOMMUTE"]);
    assert_eq!(job.metadata("isListed"), ["true"]);
    assert_eq!(job.metadata("compensationTiers").len(), 1);
    assert_eq!(
        job.metadata(ALTERNATE_DESCRIPTIONS),
        ["<p>We pay at the top of the market, everywhere, for everyone.</p>"]
    );
    assert!(job.metadata("locationAddress").is_empty());

    let back = roundtrip(&job)?;
    assert_eq!(back.tags, job.tags);
    Ok(())
}
