//! # selfheal-aws
//!
//! AWS implementations of the benchmark collaborators: S3
//! `PutPublicAccessBlock` and Lambda `Invoke`. Credentials come from the
//! default provider chain; only the region can be overridden.

pub mod lambda;
pub mod s3;

pub use lambda::LambdaInvoker;
pub use s3::S3AccessControl;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::info;

/// Resolve the shared SDK configuration, honouring an explicit region.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }

    let config = loader.load().await;
    info!(
        region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
        "AWS session configured"
    );
    config
}

/// Both collaborators built from one session.
pub fn clients(config: &SdkConfig) -> (S3AccessControl, LambdaInvoker) {
    (
        S3AccessControl::from_conf(config),
        LambdaInvoker::from_conf(config),
    )
}
