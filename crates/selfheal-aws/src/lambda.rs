//! Synchronous Lambda invocation.

use async_trait::async_trait;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use selfheal_core::{BoxError, InvocationOutput, RemediationInvoker};
use tracing::debug;

/// Invokes the remediation function with `RequestResponse` semantics.
#[derive(Debug, Clone)]
pub struct LambdaInvoker {
    client: Client,
}

impl LambdaInvoker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

/// Keep the body and the `FunctionError` marker; everything else is dropped.
pub fn into_invocation_output(output: &InvokeOutput) -> InvocationOutput {
    InvocationOutput {
        payload: output
            .payload()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default(),
        function_error: output.function_error().map(str::to_string),
    }
}

#[async_trait]
impl RemediationInvoker for LambdaInvoker {
    async fn invoke(&self, function: &str, payload: Vec<u8>) -> Result<InvocationOutput, BoxError> {
        let response = self
            .client
            .invoke()
            .function_name(function)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(aws_sdk_lambda::Error::from)?;

        debug!(
            function,
            status = response.status_code(),
            executed_version = ?response.executed_version(),
            "Lambda invoke returned"
        );

        Ok(into_invocation_output(&response))
    }
}
