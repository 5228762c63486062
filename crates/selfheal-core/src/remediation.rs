//! Remediation invocation and response timing.

use crate::collaborators::RemediationInvoker;
use crate::error::{BenchError, BenchResult};
use crate::stats::TimingSample;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Response field carrying the function's self-reported processing time.
pub const RESPONSE_TIME_FIELD: &str = "response_time_ms";

/// Event payload naming the bucket to remediate.
pub fn remediation_event(bucket_arn: &str) -> Vec<u8> {
    serde_json::json!({ "resources": [bucket_arn] })
        .to_string()
        .into_bytes()
}

/// Extract the reported processing time from a decoded response body.
///
/// Missing, non-numeric, negative or non-finite values yield `None`.
pub fn reported_time_ms(body: &Value) -> Option<u64> {
    let ms = body.as_object()?.get(RESPONSE_TIME_FIELD)?.as_f64()?;
    (ms.is_finite() && ms >= 0.0).then(|| ms.round() as u64)
}

/// Whole milliseconds, rounded to nearest.
pub fn round_ms(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}

/// Invoke the remediation function for `bucket_arn` and time the round trip.
///
/// The clock covers only the synchronous invoke call; decoding the body is
/// not part of the client-observed latency.
pub async fn invoke_remediation<I>(
    invoker: &I,
    function: &str,
    bucket_arn: &str,
) -> BenchResult<TimingSample>
where
    I: RemediationInvoker + ?Sized,
{
    let payload = remediation_event(bucket_arn);

    let start = Instant::now();
    let output = invoker
        .invoke(function, payload)
        .await
        .map_err(|source| BenchError::Invocation {
            function: function.to_string(),
            source,
        })?;
    let client_ms = round_ms(start.elapsed());

    if let Some(kind) = output.function_error {
        return Err(BenchError::RemediationFailed {
            function: function.to_string(),
            kind,
            body: String::from_utf8_lossy(&output.payload).into_owned(),
        });
    }

    let body: Value =
        serde_json::from_slice(&output.payload).map_err(|source| BenchError::MalformedResponse {
            function: function.to_string(),
            source,
        })?;
    let remediation_ms = reported_time_ms(&body);

    debug!(function, client_ms, ?remediation_ms, "Remediation invocation completed");

    Ok(TimingSample {
        client_ms,
        remediation_ms,
    })
}
