use std::sync::Arc;

use jobnorm_adapters::{SOURCES, adapter_for};
use jobnorm_core::SourceAdapter;

use crate::integration::common::{
    ASHBY_JOB, BAMBOO_JOB, GEM_BOARD_JOB, GREENHOUSE_JOB, LEVER_JOB, RIPPLING_JOB, WORKABLE_JOB,
    init_tracing, test_config,
};

fn fixture_for(source: &str) -> &'static str {
    match source {
        "ashby" => ASHBY_JOB,
        "bamboo" => BAMBOO_JOB,
        "gem" => GEM_BOARD_JOB,
        "greenhouse" => GREENHOUSE_JOB,
        "lever" => LEVER_JOB,
        "rippling" => RIPPLING_JOB,
        "workable" => WORKABLE_JOB,
        other => panic!("no fixture for {other}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn adapters_are_shared_across_tasks() {
    init_tracing();

    let mut handles = Vec::new();
    for source in SOURCES {
        let adapter: Arc<dyn SourceAdapter> = Arc::from(adapter_for(source, test_config()).unwrap());
        let expected = adapter.parse(fixture_for(source).as_bytes()).unwrap();

        for _ in 0..16 {
            let adapter = Arc::clone(&adapter);
            let expected = expected.clone();
            handles.push(tokio::spawn(async move {
                let job = adapter.parse(fixture_for(adapter.source()).as_bytes()).unwrap();
                assert_eq!(job, expected);
            }));
        }
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn malformed_payload_fails_only_its_job() {
    init_tracing();
    let adapter: Arc<dyn SourceAdapter> = Arc::from(adapter_for("lever", test_config()).unwrap());

    let payloads = [LEVER_JOB, "{truncated", LEVER_JOB];
    let mut handles = Vec::new();
    for payload in payloads {
        let adapter = Arc::clone(&adapter);
        handles.push(tokio::spawn(async move { adapter.parse(payload.as_bytes()) }));
    }

    let mut ok = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(err) => {
                assert!(err.is_fatal());
                failed += 1;
            }
        }
    }
    assert_eq!((ok, failed), (2, 1));
}
