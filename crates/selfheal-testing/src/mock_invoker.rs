//! # Mock Remediation Function
//!
//! Returns scripted responses after a simulated latency. The latency is a
//! `tokio::time::sleep`, so tests running with paused time observe it
//! exactly.

use async_trait::async_trait;
use selfheal_core::{BoxError, InvocationOutput, RemediationInvoker};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationCall {
    pub function: String,
    pub payload: Vec<u8>,
}

impl InvocationCall {
    /// Payload decoded as JSON.
    pub fn event(&self) -> serde_json::Value {
        serde_json::from_slice(&self.payload).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(InvocationOutput),
    Error(String),
}

/// A remediation function with predictable behaviour.
#[derive(Debug, Clone)]
pub struct MockInvoker {
    latency: Duration,
    responses: HashMap<usize, Scripted>,
    default_response: Scripted,
    calls: Arc<Mutex<Vec<InvocationCall>>>,
}

impl MockInvoker {
    /// Responds with an empty JSON object, i.e. no reported timing.
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            responses: HashMap::new(),
            default_response: Scripted::Output(InvocationOutput::ok("{}")),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Report `ms` as the function's own processing time on every call.
    pub fn with_response_time(self, ms: u64) -> Self {
        self.with_default_body(serde_json::json!({ "response_time_ms": ms }).to_string())
    }

    pub fn with_default_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.default_response = Scripted::Output(InvocationOutput::ok(body));
        self
    }

    /// Respond with `body` on the `call`-th invocation (1-based).
    pub fn with_body_on(mut self, call: usize, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(call, Scripted::Output(InvocationOutput::ok(body)));
        self
    }

    /// Fail the `call`-th invocation at the transport level.
    pub fn with_failure_on(mut self, call: usize, message: impl Into<String>) -> Self {
        self.responses.insert(call, Scripted::Error(message.into()));
        self
    }

    /// Make the `call`-th invocation report an unhandled function error.
    pub fn with_function_error_on(
        mut self,
        call: usize,
        kind: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.responses
            .insert(call, Scripted::Output(InvocationOutput::failed(kind, body)));
        self
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> Vec<InvocationCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemediationInvoker for MockInvoker {
    async fn invoke(&self, function: &str, payload: Vec<u8>) -> Result<InvocationOutput, BoxError> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(InvocationCall {
                function: function.to_string(),
                payload,
            });
            calls.len()
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self
            .responses
            .get(&call_number)
            .unwrap_or(&self.default_response)
        {
            Scripted::Output(output) => Ok(output.clone()),
            Scripted::Error(message) => Err(message.clone().into()),
        }
    }
}
