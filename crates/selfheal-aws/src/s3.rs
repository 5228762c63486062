//! S3 Block Public Access control.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::types::PublicAccessBlockConfiguration;
use selfheal_core::{BoxError, PublicAccessControl, PublicAccessPolicy};
use tracing::debug;

/// Applies Block Public Access settings through `PutPublicAccessBlock`.
#[derive(Debug, Clone)]
pub struct S3AccessControl {
    client: Client,
}

impl S3AccessControl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

/// Translate a policy into the S3 request shape.
pub fn block_configuration(policy: PublicAccessPolicy) -> PublicAccessBlockConfiguration {
    PublicAccessBlockConfiguration::builder()
        .block_public_acls(policy.block_public_acls)
        .ignore_public_acls(policy.ignore_public_acls)
        .block_public_policy(policy.block_public_policy)
        .restrict_public_buckets(policy.restrict_public_buckets)
        .build()
}

#[async_trait]
impl PublicAccessControl for S3AccessControl {
    async fn put_public_access_block(
        &self,
        bucket: &str,
        policy: PublicAccessPolicy,
    ) -> Result<(), BoxError> {
        self.client
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(block_configuration(policy))
            .send()
            .await
            .map_err(aws_sdk_s3::Error::from)?;

        debug!(bucket, ?policy, "PutPublicAccessBlock succeeded");
        Ok(())
    }
}
