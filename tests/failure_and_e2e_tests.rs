//! End-to-end benchmark scenarios: a full successful run, fail-fast aborts,
//! the re-lock path and interruption.

use selfheal_core::{BenchError, BenchmarkDriver, PolicyState, RunConfig, report};
use selfheal_testing::{MockAccessControl, MockInvoker, mock_driver};
use std::time::Duration;
use tokio::time::sleep;

fn config(iterations: u32) -> RunConfig {
    RunConfig::new("test-bucket", "test-fn", iterations).expect("valid config")
}

#[tokio::test(start_paused = true)]
async fn two_iterations_with_reported_timing() {
    let invoker = MockInvoker::new()
        .with_response_time(42)
        .with_latency(Duration::from_millis(50));
    let driver = mock_driver(config(2), invoker);

    let mut out = Vec::new();
    let summary = driver.run(&mut out).await.expect("run succeeds");
    report::write_summary(&mut out, &summary).unwrap();

    assert_eq!(summary.client.count, 2);
    assert_eq!(summary.client.mean_ms, Some(50.0));
    assert_eq!(summary.remediation.count, 2);
    assert_eq!(summary.remediation.mean_ms, Some(42.0));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.matches(" -> client RTT: 50 ms, remediation reported: 42 ms")
            .count(),
        2
    );
    assert!(text.contains("Iteration 2/2 - disabling block public access..."));
    assert!(text.ends_with(
        "=== RESULTS ===\n\
         Client-side RTT over 2 runs: avg = 50.00 ms\n\
         Remediation-reported response time over 2 runs: avg = 42.00 ms\n"
    ));
}

#[tokio::test(start_paused = true)]
async fn invocation_failure_without_restore_leaves_bucket_open() {
    let invoker = MockInvoker::new().with_failure_on(2, "TooManyRequestsException");
    let driver = mock_driver(config(3).with_restore_on_failure(false), invoker);

    let mut out = Vec::new();
    let err = driver.run(&mut out).await.unwrap_err();

    match &err {
        BenchError::Invocation { function, source } => {
            assert_eq!(function, "test-fn");
            assert_eq!(source.to_string(), "TooManyRequestsException");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let control = driver.control();
    assert_eq!(
        control.states(),
        vec![
            Some(PolicyState::Open),
            Some(PolicyState::Locked),
            Some(PolicyState::Open)
        ]
    );
    assert_eq!(control.current_state(), Some(PolicyState::Open));
    assert_eq!(driver.invoker().call_count(), 2);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Iteration 2/3"));
    assert!(!text.contains("Iteration 3/3"));
}

#[tokio::test(start_paused = true)]
async fn invocation_failure_with_restore_relocks_bucket() {
    let invoker = MockInvoker::new().with_failure_on(2, "TooManyRequestsException");
    let driver = mock_driver(config(3), invoker);

    let err = driver.run(&mut std::io::sink()).await.unwrap_err();

    assert!(matches!(err, BenchError::Invocation { .. }));
    let control = driver.control();
    assert_eq!(
        control.states(),
        vec![
            Some(PolicyState::Open),
            Some(PolicyState::Locked),
            Some(PolicyState::Open),
            Some(PolicyState::Locked)
        ]
    );
    assert_eq!(control.current_state(), Some(PolicyState::Locked));
}

#[tokio::test(start_paused = true)]
async fn failed_relock_keeps_original_error() {
    let control = MockAccessControl::new().with_failure_on(2, "AccessDenied");
    let invoker = MockInvoker::new().with_failure_on(1, "ServiceException");
    let driver = BenchmarkDriver::new(config(1), control, invoker);

    let err = driver.run(&mut std::io::sink()).await.unwrap_err();

    assert!(matches!(err, BenchError::Invocation { .. }));
    assert_eq!(driver.control().call_count(), 2);
    assert_eq!(driver.control().current_state(), Some(PolicyState::Open));
}

#[tokio::test(start_paused = true)]
async fn policy_toggle_failure_aborts_run() {
    let control = MockAccessControl::new().with_failure_on(2, "NoSuchBucket");
    let driver = BenchmarkDriver::new(config(3), control, MockInvoker::new());

    let err = driver.run(&mut std::io::sink()).await.unwrap_err();

    match err {
        BenchError::PolicyToggle { bucket, state, .. } => {
            assert_eq!(bucket, "test-bucket");
            assert_eq!(state, PolicyState::Locked);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Failed lock, then the single restore attempt.
    assert_eq!(driver.control().call_count(), 3);
    assert_eq!(driver.control().current_state(), Some(PolicyState::Locked));
    assert_eq!(driver.invoker().call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn function_error_aborts_run() {
    let invoker = MockInvoker::new().with_function_error_on(
        1,
        "Unhandled",
        r#"{"errorMessage":"remediation crashed"}"#,
    );
    let driver = mock_driver(config(2), invoker);

    let err = driver.run(&mut std::io::sink()).await.unwrap_err();

    match err {
        BenchError::RemediationFailed { kind, body, .. } => {
            assert_eq!(kind, "Unhandled");
            assert!(body.contains("remediation crashed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn malformed_response_aborts_run() {
    let invoker = MockInvoker::new().with_body_on(1, "not json");
    let driver = mock_driver(config(2), invoker);

    let err = driver.run(&mut std::io::sink()).await.unwrap_err();

    assert!(matches!(err, BenchError::MalformedResponse { .. }));
    assert_eq!(driver.invoker().call_count(), 1);
    assert_eq!(driver.control().current_state(), Some(PolicyState::Locked));
}

#[tokio::test(start_paused = true)]
async fn interrupt_during_invocation_relocks_bucket() {
    let invoker = MockInvoker::new().with_latency(Duration::from_secs(10));
    let driver = mock_driver(config(3), invoker);

    let err = driver
        .run_until(&mut std::io::sink(), sleep(Duration::from_secs(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, BenchError::Interrupted));
    assert_eq!(driver.invoker().call_count(), 1);
    assert_eq!(
        driver.control().states(),
        vec![Some(PolicyState::Open), Some(PolicyState::Locked)]
    );
}

#[tokio::test(start_paused = true)]
async fn interrupt_during_pause_needs_no_relock() {
    let driver = mock_driver(config(5), MockInvoker::new());

    let err = driver
        .run_until(&mut std::io::sink(), sleep(Duration::from_millis(1500)))
        .await
        .unwrap_err();

    assert!(matches!(err, BenchError::Interrupted));
    assert_eq!(driver.invoker().call_count(), 2);
    assert_eq!(driver.control().call_count(), 4);
    assert_eq!(driver.control().current_state(), Some(PolicyState::Locked));
}
