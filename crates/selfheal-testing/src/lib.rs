//! # selfheal Testing Utilities
//!
//! Mock collaborators for exercising benchmark runs without AWS.
//!
//! ## Usage
//!
//! ```rust
//! use selfheal_core::{BenchmarkDriver, RunConfig};
//! use selfheal_testing::{MockAccessControl, MockInvoker};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let config = RunConfig::new("test-bucket", "test-fn", 2).unwrap();
//! let driver = BenchmarkDriver::new(
//!     config,
//!     MockAccessControl::new(),
//!     MockInvoker::new().with_response_time(42),
//! );
//!
//! let mut out = Vec::new();
//! let summary = driver.run(&mut out).await.unwrap();
//! assert_eq!(summary.remediation.mean_ms, Some(42.0));
//! # }
//! ```

/// Recording storage control plane
pub mod mock_control;
/// Scripted remediation function
pub mod mock_invoker;

pub use mock_control::{MockAccessControl, PolicyCall};
pub use mock_invoker::{InvocationCall, MockInvoker};

use selfheal_core::{BenchmarkDriver, RunConfig};

/// Driver wired to fresh mocks, for tests that only vary the configuration.
pub fn mock_driver(
    config: RunConfig,
    invoker: MockInvoker,
) -> BenchmarkDriver<MockAccessControl, MockInvoker> {
    BenchmarkDriver::new(config, MockAccessControl::new(), invoker)
}
