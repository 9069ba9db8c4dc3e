use chrono::{TimeZone, Utc};
use jobnorm_core::{Department, EmploymentType, LocationType};

use crate::integration::common::{GREENHOUSE_JOB, parse_fixture, roundtrip};

#[test]
fn parses_greenhouse_job() -> anyhow::Result<()> {
    let job = parse_fixture("greenhouse", GREENHOUSE_JOB)?;

    assert_eq!(job.source, "greenhouse");
    assert_eq!(job.source_id, "7454336");
    assert_eq!(job.title, "Customer Success Manager II, Mid-Market");
    assert_eq!(
        job.url,
        "https://job-boards.greenhouse.io/remotecom/jobs/7454336"
    );
    assert_eq!(job.department, Department::CustomerSuccessSupport);
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.company.name, "Remote");
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 5, 20, 14, 31, 12).unwrap())
    );
    Ok(())
}

#[test]
fn greenhouse_remote_location_name() -> anyhow::Result<()> {
    let job = parse_fixture("greenhouse", GREENHOUSE_JOB)?;

    assert_eq!(job.location, "Remote - Europe");
    assert_eq!(job.location_type, LocationType::Remote);
    assert!(job.is_remote);
    assert_eq!(job.metadata("office"), ["Europe"]);
    Ok(())
}

#[test]
fn greenhouse_pay_range_in_major_units() -> anyhow::Result<()> {
    let job = parse_fixture("greenhouse", GREENHOUSE_JOB)?;

    assert_eq!(job.min_compensation, 185_000.0);
    assert_eq!(job.max_compensation, 317_000.0);
    assert_eq!(job.compensation_unit.as_deref(), Some("EUR"));
    assert_eq!(job.metadata("pay_range_title"), ["Europe"]);
    Ok(())
}

#[test]
fn greenhouse_custom_fields_and_extras() -> anyhow::Result<()> {
    let job = parse_fixture("greenhouse", GREENHOUSE_JOB)?;

    assert_eq!(job.metadata("Team"), ["EMEA Engineering"]);
    assert_eq!(job.metadata("Employment Type"), ["Full-time"]);
    assert_eq!(job.metadata("internal_job_id"), ["5219870"]);
    assert_eq!(job.metadata("requisition_id"), ["CS-221"]);
    assert_eq!(job.metadata("language"), ["en"]);
    assert_eq!(job.metadata("data_compliance").len(), 1);

    let back = roundtrip(&job)?;
    assert_eq!(back.tags, job.tags);
    Ok(())
}
