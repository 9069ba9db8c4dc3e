use chrono::{TimeZone, Utc};
use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::{Department, EmploymentType, LocationType};

use crate::integration::common::{LEVER_JOB, parse_fixture};

#[test]
fn parses_lever_posting() -> anyhow::Result<()> {
    let job = parse_fixture("lever", LEVER_JOB)?;

    assert_eq!(job.source, "lever");
    assert_eq!(job.source_id, "e002c7c5-c91d-46d0-b23e-62bccdb1695c");
    assert_eq!(job.title, "Corporate Sales Manager, France (h/f/x)");
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.location, "France");
    assert_eq!(job.location_type, LocationType::Remote);
    assert!(job.is_remote);
    assert_eq!(job.department, Department::Unknown);
    assert_eq!(job.department_raw.as_deref(), Some("Sales & Marketing"));
    assert_eq!(job.description, "Join the French corporate sales team.");
    Ok(())
}

#[test]
fn lever_created_at_is_milliseconds() -> anyhow::Result<()> {
    let job = parse_fixture("lever", LEVER_JOB)?;

    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 2, 26, 9, 53, 4).unwrap())
    );
    Ok(())
}

#[test]
fn lever_salary_range() -> anyhow::Result<()> {
    let job = parse_fixture("lever", LEVER_JOB)?;

    assert_eq!(job.min_compensation, 187_000.0);
    assert_eq!(job.max_compensation, 245_000.0);
    assert_eq!(job.compensation_unit.as_deref(), Some("EUR"));
    assert_eq!(job.metadata("compensation_interval"), ["per-year-salary"]);
    Ok(())
}

#[test]
fn lever_categories_and_lists() -> anyhow::Result<()> {
    let job = parse_fixture("lever", LEVER_JOB)?;

    assert_eq!(job.metadata("commitment_raw"), ["Full-time"]);
    assert_eq!(job.metadata("team"), ["Corporate Sales"]);
    assert_eq!(job.metadata("secondary_location"), ["France", "Paris"]);
    assert_eq!(job.metadata("country"), ["FR"]);
    assert_eq!(
        job.metadata("list_Benefits"),
        ["<li>Health, dental, vision</li>"]
    );
    assert_eq!(
        job.metadata(ALTERNATE_DESCRIPTIONS),
        ["<div>Join the French corporate sales team.</div>"]
    );
    assert_eq!(
        job.metadata("applyUrl"),
        ["https://jobs.lever.co/leverdemo/e002c7c5-c91d-46d0-b23e-62bccdb1695c/apply"]
    );
    Ok(())
}
