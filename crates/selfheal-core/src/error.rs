//! # Error Types
//!
//! Every failure a benchmark run can hit. Collaborator errors arrive boxed so
//! this crate stays independent of any cloud SDK.

use crate::policy::PolicyState;
use thiserror::Error;

/// Boxed error returned by the external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used across the benchmark driver.
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors that terminate a benchmark run.
///
/// None of these are retried: the first error ends the run and no summary is
/// produced.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The run configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Applying a public access block configuration failed.
    #[error("Failed to apply {state} public access policy to bucket '{bucket}'")]
    PolicyToggle {
        bucket: String,
        state: PolicyState,
        #[source]
        source: BoxError,
    },

    /// The remediation function could not be invoked.
    #[error("Invocation of remediation function '{function}' failed")]
    Invocation {
        function: String,
        #[source]
        source: BoxError,
    },

    /// The remediation function ran and reported an unhandled error.
    #[error("Remediation function '{function}' returned {kind}: {body}")]
    RemediationFailed {
        function: String,
        kind: String,
        body: String,
    },

    /// The remediation response body is not valid JSON.
    #[error("Malformed response from remediation function '{function}'")]
    MalformedResponse {
        function: String,
        #[source]
        source: serde_json::Error,
    },

    /// The run was interrupted before it completed.
    #[error("Benchmark run interrupted")]
    Interrupted,

    /// Writing progress or summary output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Whether the error originated from a call against the cloud provider.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            BenchError::PolicyToggle { .. }
                | BenchError::Invocation { .. }
                | BenchError::RemediationFailed { .. }
        )
    }
}
