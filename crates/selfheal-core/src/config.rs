//! Run configuration.

use crate::error::{BenchError, BenchResult};
use std::time::Duration;

/// Iterations run when none are requested.
pub const DEFAULT_ITERATIONS: u32 = 50;

/// Fixed pause between iterations, letting control-plane state settle.
pub const SETTLE_PAUSE: Duration = Duration::from_secs(1);

/// Immutable parameters of a single benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Bucket whose Block Public Access settings are toggled.
    pub bucket: String,
    /// Remediation function name or ARN.
    pub function: String,
    pub iterations: u32,
    /// Region override; the provider default chain applies when absent.
    pub region: Option<String>,
    /// Re-apply the locked policy when a run fails with the bucket exposed.
    pub restore_on_failure: bool,
}

impl RunConfig {
    /// Build a configuration, rejecting blank identifiers.
    pub fn new(
        bucket: impl Into<String>,
        function: impl Into<String>,
        iterations: u32,
    ) -> BenchResult<Self> {
        let bucket = bucket.into();
        let function = function.into();

        if bucket.trim().is_empty() {
            return Err(BenchError::Configuration(
                "bucket name must not be empty".into(),
            ));
        }
        if function.trim().is_empty() {
            return Err(BenchError::Configuration(
                "function name must not be empty".into(),
            ));
        }

        Ok(Self {
            bucket,
            function,
            iterations,
            region: None,
            restore_on_failure: true,
        })
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region.filter(|r| !r.trim().is_empty());
        self
    }

    pub fn with_restore_on_failure(mut self, restore: bool) -> Self {
        self.restore_on_failure = restore;
        self
    }

    /// ARN of the target bucket, as named in the remediation event.
    pub fn bucket_arn(&self) -> String {
        format!("arn:aws:s3:::{}", self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = RunConfig::new("bucket", "fn", DEFAULT_ITERATIONS).unwrap();
        assert_eq!(config.iterations, 50);
        assert_eq!(config.region, None);
        assert!(config.restore_on_failure);
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        assert!(matches!(
            RunConfig::new("  ", "fn", 1),
            Err(BenchError::Configuration(_))
        ));
        assert!(matches!(
            RunConfig::new("bucket", "", 1),
            Err(BenchError::Configuration(_))
        ));
    }

    #[test]
    fn blank_region_falls_back_to_default_chain() {
        let config = RunConfig::new("b", "f", 1)
            .unwrap()
            .with_region(Some(String::new()));
        assert_eq!(config.region, None);

        let config = config.with_region(Some("eu-north-1".into()));
        assert_eq!(config.region.as_deref(), Some("eu-north-1"));
    }

    #[test]
    fn bucket_arn_format() {
        let config = RunConfig::new("secure-self-healing-bucket", "f", 1).unwrap();
        assert_eq!(config.bucket_arn(), "arn:aws:s3:::secure-self-healing-bucket");
    }
}
