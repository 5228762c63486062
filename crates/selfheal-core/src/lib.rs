//! # selfheal-core
//!
//! Benchmark driver for an S3 Block Public Access self-healing control.
//!
//! A run repeatedly disables a bucket's Block Public Access settings, invokes
//! the remediation function that is expected to turn them back on, and records
//! how long the round trip took. The cloud calls sit behind
//! [`PublicAccessControl`] and [`RemediationInvoker`].
//!
//! ## Modules
//!
//! - **config**: run parameters and fixed constants
//! - **policy**: the open and locked Block Public Access values
//! - **collaborators**: traits for the two external calls
//! - **remediation**: event payload, invocation timing, response parsing
//! - **stats**: sample sequences and the mean-only summary
//! - **report**: progress and results output
//! - **driver**: the iteration loop

pub mod collaborators;
pub mod config;
pub mod driver;
pub mod error;
pub mod policy;
pub mod remediation;
pub mod report;
pub mod stats;

pub use collaborators::{InvocationOutput, PublicAccessControl, RemediationInvoker};
pub use config::{DEFAULT_ITERATIONS, RunConfig, SETTLE_PAUSE};
pub use driver::BenchmarkDriver;
pub use error::{BenchError, BenchResult, BoxError};
pub use policy::{PolicyState, PublicAccessPolicy};
pub use stats::{SampleStats, Samples, Summary, TimingSample};
