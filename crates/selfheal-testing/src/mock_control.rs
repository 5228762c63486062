//! # Mock Storage Control Plane
//!
//! Records every Block Public Access request and can be told to fail on a
//! chosen call.

use async_trait::async_trait;
use selfheal_core::{BoxError, PolicyState, PublicAccessControl, PublicAccessPolicy};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One recorded `put_public_access_block` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCall {
    pub bucket: String,
    pub policy: PublicAccessPolicy,
}

/// A control plane that accepts requests and remembers them.
///
/// Clones share the same call history, so a clone handed to the driver can be
/// inspected through the original.
#[derive(Debug, Clone, Default)]
pub struct MockAccessControl {
    failures: HashMap<usize, String>,
    calls: Arc<Mutex<Vec<PolicyCall>>>,
}

impl MockAccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`-th request (1-based) with `message`. The failed request
    /// is still recorded but does not change the bucket state.
    pub fn with_failure_on(mut self, call: usize, message: impl Into<String>) -> Self {
        self.failures.insert(call, message.into());
        self
    }

    /// All requests received, failed ones included.
    pub fn calls(&self) -> Vec<PolicyCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Canonical states requested, in order.
    pub fn states(&self) -> Vec<Option<PolicyState>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.policy.state())
            .collect()
    }

    /// State the bucket was left in by the last successful request.
    pub fn current_state(&self) -> Option<PolicyState> {
        let calls = self.calls.lock().unwrap();
        calls
            .iter()
            .enumerate()
            .rev()
            .find(|(i, _)| !self.failures.contains_key(&(i + 1)))
            .and_then(|(_, c)| c.policy.state())
    }
}

#[async_trait]
impl PublicAccessControl for MockAccessControl {
    async fn put_public_access_block(
        &self,
        bucket: &str,
        policy: PublicAccessPolicy,
    ) -> Result<(), BoxError> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(PolicyCall {
                bucket: bucket.to_string(),
                policy,
            });
            calls.len()
        };

        match self.failures.get(&call_number) {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}
