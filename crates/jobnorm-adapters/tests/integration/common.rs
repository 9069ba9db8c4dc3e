use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use jobnorm_adapters::{AdapterConfig, adapter_for};
use jobnorm_core::{JobRecord, NormalizeConfig};
use tracing_subscriber::EnvFilter;

pub const ASHBY_JOB: &str = include_str!("../fixtures/ashby_job.json");
pub const BAMBOO_JOB: &str = include_str!("../fixtures/bamboo_job.json");
pub const GEM_BOARD_JOB: &str = include_str!("../fixtures/gem_board_job.json");
pub const GEM_POSTING: &str = include_str!("../fixtures/gem_posting.json");
pub const GREENHOUSE_JOB: &str = include_str!("../fixtures/greenhouse_job.json");
pub const LEVER_JOB: &str = include_str!("../fixtures/lever_job.json");
pub const RIPPLING_JOB: &str = include_str!("../fixtures/rippling_job.json");
pub const WORKABLE_JOB: &str = include_str!("../fixtures/workable_job.json");

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "now" so date plausibility checks do not depend on the wall clock.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
}

pub fn test_config() -> AdapterConfig {
    AdapterConfig::default()
        .with_normalize(NormalizeConfig::default().with_reference_time(reference_time()))
}

/// Parse a fixture with the named adapter.
pub fn parse_fixture(source: &str, fixture: &str) -> anyhow::Result<JobRecord> {
    init_tracing();
    let adapter = adapter_for(source, test_config())?;
    Ok(adapter.parse(fixture.as_bytes())?)
}

/// Serialize and deserialize a record, as downstream storage would.
pub fn roundtrip(job: &JobRecord) -> anyhow::Result<JobRecord> {
    let json = serde_json::to_string(job)?;
    Ok(serde_json::from_str(&json)?)
}
