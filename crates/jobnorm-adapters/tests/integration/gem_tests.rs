use chrono::{TimeZone, Utc};
use jobnorm_core::metadata::ALTERNATE_DESCRIPTIONS;
use jobnorm_core::{Department, EmploymentType, LocationType};

use crate::integration::common::{GEM_BOARD_JOB, GEM_POSTING, parse_fixture};

#[test]
fn parses_gem_board_job() -> anyhow::Result<()> {
    let job = parse_fixture("gem", GEM_BOARD_JOB)?;

    assert_eq!(job.source, "gem");
    assert_eq!(job.source_id, "am9iOlINaThFqbrhpjCKIMpLj9E");
    assert_eq!(
        job.url,
        "https://jobs.gem.com/arlo/am9icG9zdDruRXVwItfMiCqE7gmjrD4Q"
    );
    assert_eq!(job.title, "Founding Software Engineer | Data Platform");
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.location, "San Francisco, CA");
    assert_eq!(job.location_type, LocationType::Onsite);
    assert!(!job.is_remote);
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 2, 11, 9, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn gem_compound_department_stays_unknown() -> anyhow::Result<()> {
    let job = parse_fixture("gem", GEM_BOARD_JOB)?;

    assert_eq!(job.department, Department::Unknown);
    assert_eq!(
        job.department_raw.as_deref(),
        Some("Engineering & Data Science")
    );
    assert_eq!(job.metadata("department"), ["Engineering & Data Science"]);
    Ok(())
}

#[test]
fn gem_board_job_metadata() -> anyhow::Result<()> {
    let job = parse_fixture("gem", GEM_BOARD_JOB)?;

    assert_eq!(job.metadata("gem_id"), ["am9icG9zdDruRXVwItfMiCqE7gmjrD4Q"]);
    assert_eq!(job.metadata("office_location"), ["San Francisco"]);
    assert_eq!(
        job.metadata("office_location_name"),
        ["San Francisco", "CA", "United States"]
    );
    assert_eq!(job.metadata("requisition_id"), ["ENG-014"]);
    assert_eq!(job.metadata("created_at"), ["2025-02-10T18:22:41.000Z"]);
    Ok(())
}

#[test]
fn parses_gem_graphql_posting() -> anyhow::Result<()> {
    let job = parse_fixture("gem", GEM_POSTING)?;

    assert_eq!(job.source_id, "am9icG9zdDruRXVwItfMiCqE7gmjrD4Q");
    assert_eq!(job.department, Department::SoftwareEngineering);
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.location_type, LocationType::Onsite);
    assert_eq!(job.location, "San Francisco, CA");
    assert_eq!(
        job.date_posted,
        Some(Utc.with_ymd_and_hms(2025, 2, 11, 9, 0, 0).unwrap())
    );

    assert_eq!(job.metadata("team_display_name"), ["Data Platform"]);
    assert_eq!(job.metadata("location_country"), ["US"]);
    assert_eq!(job.metadata("location_is_remote"), ["false"]);
    assert_eq!(job.metadata("job_location_city"), ["San Francisco"]);
    assert_eq!(job.metadata(ALTERNATE_DESCRIPTIONS).len(), 1);
    assert_eq!(job.metadata("__typename"), ["OatsExternalJobPosting"]);

    assert_eq!(job.company.name, "Arlo");
    assert_eq!(
        job.company.homepage_url.as_ref().map(|u| u.as_str()),
        Some("https://arlo.ai/")
    );
    assert!(job.company.logo_url.is_none());
    Ok(())
}
