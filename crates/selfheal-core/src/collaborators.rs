//! # External Collaborators
//!
//! The two cloud calls the benchmark depends on. Each trait mirrors a single
//! provider operation; implementations live in `selfheal-aws` and, for tests,
//! in `selfheal-testing`.

use crate::error::BoxError;
use crate::policy::PublicAccessPolicy;
use async_trait::async_trait;

/// Storage control plane: sets a bucket's Block Public Access configuration.
#[async_trait]
pub trait PublicAccessControl: Send + Sync {
    /// Apply all four switches in one request.
    ///
    /// A successful return is the only acknowledgment. The new configuration
    /// may not yet be visible to every reader.
    async fn put_public_access_block(
        &self,
        bucket: &str,
        policy: PublicAccessPolicy,
    ) -> Result<(), BoxError>;
}

/// Function runtime: invokes the remediation function and waits for it.
#[async_trait]
pub trait RemediationInvoker: Send + Sync {
    async fn invoke(&self, function: &str, payload: Vec<u8>) -> Result<InvocationOutput, BoxError>;
}

/// Raw result of a synchronous invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOutput {
    /// Response body returned by the function.
    pub payload: Vec<u8>,
    /// Set when the function raised instead of returning normally.
    pub function_error: Option<String>,
}

impl InvocationOutput {
    pub fn ok(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            function_error: None,
        }
    }

    pub fn failed(kind: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            function_error: Some(kind.into()),
        }
    }
}
