use chrono::{TimeZone, Utc};
use jobnorm_core::{Department, EmploymentType, LocationType};

use crate::integration::common::{WORKABLE_JOB, parse_fixture};

#[test]
fn parses_workable_job() -> anyhow::Result<()> {
    let job = parse_fixture("workable", WORKABLE_JOB)?;

    assert_eq!(job.source, "workable");
    assert_eq!(job.source_id, "741A8A4254");
    assert_eq!(job.title, "Event & Webinar Coordinator (Part-Time)");
    assert_eq!(job.employment_type, EmploymentType::PartTime);
    assert_eq!(job.department, Department::Marketing);
    assert_eq!(job.department_raw.as_deref(), Some("Marketing"));
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 5, 29, 0, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn workable_hybrid_location() -> anyhow::Result<()> {
    let job = parse_fixture("workable", WORKABLE_JOB)?;

    assert_eq!(job.location, "Mexico City, Mexico City, Mexico");
    assert_eq!(job.location_type, LocationType::Hybrid);
    assert!(!job.is_remote);
    assert_eq!(
        job.metadata("parsed_location"),
        ["Mexico City, Mexico City, Mexico"]
    );
    Ok(())
}

#[test]
fn workable_extras() -> anyhow::Result<()> {
    let job = parse_fixture("workable", WORKABLE_JOB)?;

    assert_eq!(job.metadata("workable_id"), ["4215522"]);
    assert_eq!(job.metadata("parsed_department"), ["Marketing"]);
    assert_eq!(job.metadata("state"), ["published"]);
    assert_eq!(job.metadata("isInternal"), ["false"]);
    Ok(())
}
