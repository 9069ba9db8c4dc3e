use chrono::{TimeZone, Utc};
use jobnorm_core::{Department, EmploymentType, LocationType};

use crate::integration::common::{BAMBOO_JOB, parse_fixture, roundtrip};

#[test]
fn parses_bamboo_opening() -> anyhow::Result<()> {
    let job = parse_fixture("bamboo", BAMBOO_JOB)?;

    assert_eq!(job.source, "bamboo");
    assert_eq!(job.source_id, "158");
    assert_eq!(job.url, "https://axomic.bamboohr.com/careers/158");
    assert_eq!(job.title, "VP of Customer Success");
    assert_eq!(job.department, Department::CustomerSuccessSupport);
    assert_eq!(job.department_raw.as_deref(), Some("Customer Success"));
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 4, 3, 0, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn bamboo_location_and_compensation() -> anyhow::Result<()> {
    let job = parse_fixture("bamboo", BAMBOO_JOB)?;

    assert_eq!(job.location, "New York, New York 10018, United States");
    assert_eq!(job.location_type, LocationType::Hybrid);
    assert!(!job.is_remote);
    assert_eq!(job.min_compensation, 250_000.0);
    assert_eq!(job.max_compensation, 350_000.0);
    assert_eq!(job.compensation_unit.as_deref(), Some("$"));

    assert_eq!(job.metadata("compensation"), ["$250,000 - $350,000"]);
    assert_eq!(
        job.metadata("atsLocation"),
        ["New York, New York, United States"]
    );
    Ok(())
}

#[test]
fn bamboo_unrecognized_fields_survive_roundtrip() -> anyhow::Result<()> {
    let job = parse_fixture("bamboo", BAMBOO_JOB)?;

    assert_eq!(job.metadata("jobOpeningStatus"), ["Open"]);
    assert_eq!(job.metadata("departmentId"), ["18517"]);
    assert_eq!(job.metadata("minimumExperience"), ["Senior Executive"]);
    assert!(job.metadata("isRemote").is_empty());

    let back = roundtrip(&job)?;
    assert_eq!(back.tags, job.tags);
    assert_eq!(back.location, job.location);
    Ok(())
}
