//! # Benchmark Driver
//!
//! Runs the iteration loop: open the bucket, invoke the remediation function,
//! record its timing, lock the bucket again, pause. Every step is awaited in
//! order on a single task and the first error ends the run.

use crate::collaborators::{PublicAccessControl, RemediationInvoker};
use crate::config::{RunConfig, SETTLE_PAUSE};
use crate::error::{BenchError, BenchResult};
use crate::policy::PolicyState;
use crate::remediation::invoke_remediation;
use crate::report;
use crate::stats::{Samples, Summary};
use std::future::Future;
use std::io::Write;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Drives a benchmark run against the given collaborators.
pub struct BenchmarkDriver<C, I> {
    config: RunConfig,
    control: C,
    invoker: I,
}

impl<C, I> BenchmarkDriver<C, I>
where
    C: PublicAccessControl,
    I: RemediationInvoker,
{
    pub fn new(config: RunConfig, control: C, invoker: I) -> Self {
        Self {
            config,
            control,
            invoker,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Run every iteration, writing progress to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> BenchResult<Summary> {
        self.run_until(out, std::future::pending()).await
    }

    /// Run every iteration unless `shutdown` resolves first.
    ///
    /// On failure or interruption with the bucket possibly open, the locked
    /// policy is re-applied once when `restore_on_failure` is set. The
    /// original error is returned either way.
    pub async fn run_until<W, F>(&self, out: &mut W, shutdown: F) -> BenchResult<Summary>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        info!(
            bucket = %self.config.bucket,
            function = %self.config.function,
            iterations = self.config.iterations,
            "Starting remediation benchmark"
        );

        let mut samples = Samples::new();
        let mut exposed = false;

        let outcome = tokio::select! {
            biased;
            _ = shutdown => Err(BenchError::Interrupted),
            result = self.iterate(out, &mut samples, &mut exposed) => result,
        };

        match outcome {
            Ok(()) => {
                let summary = samples.summarize();
                info!(
                    client_runs = summary.client.count,
                    client_mean_ms = ?summary.client.mean_ms,
                    remediation_runs = summary.remediation.count,
                    remediation_mean_ms = ?summary.remediation.mean_ms,
                    "Benchmark completed"
                );
                Ok(summary)
            }
            Err(err) => {
                error!(error = %err, completed = samples.client().len(), "Benchmark aborted");
                if exposed {
                    self.recover_exposed_bucket().await;
                }
                Err(err)
            }
        }
    }

    async fn iterate<W: Write>(
        &self,
        out: &mut W,
        samples: &mut Samples,
        exposed: &mut bool,
    ) -> BenchResult<()> {
        let total = self.config.iterations;
        let bucket_arn = self.config.bucket_arn();

        for iteration in 1..=total {
            report::write_iteration_start(out, iteration, total)?;
            *exposed = true;
            self.apply(PolicyState::Open).await?;

            report::write_invoking(out)?;
            let sample =
                invoke_remediation(&self.invoker, &self.config.function, &bucket_arn).await?;
            samples.record(sample);
            report::write_sample(out, &sample)?;
            info!(
                iteration,
                client_ms = sample.client_ms,
                remediation_ms = ?sample.remediation_ms,
                "Iteration sample recorded"
            );

            report::write_relocking(out)?;
            self.apply(PolicyState::Locked).await?;
            *exposed = false;

            sleep(SETTLE_PAUSE).await;
        }

        Ok(())
    }

    async fn apply(&self, state: PolicyState) -> BenchResult<()> {
        self.control
            .put_public_access_block(&self.config.bucket, state.policy())
            .await
            .map_err(|source| BenchError::PolicyToggle {
                bucket: self.config.bucket.clone(),
                state,
                source,
            })?;
        debug!(bucket = %self.config.bucket, %state, "Public access policy applied");
        Ok(())
    }

    async fn recover_exposed_bucket(&self) {
        if !self.config.restore_on_failure {
            warn!(
                bucket = %self.config.bucket,
                "Run ended with Block Public Access possibly disabled; restore is turned off"
            );
            return;
        }

        match self.apply(PolicyState::Locked).await {
            Ok(()) => info!(bucket = %self.config.bucket, "Block Public Access restored after failure"),
            Err(err) => error!(
                bucket = %self.config.bucket,
                error = %err,
                "Could not restore Block Public Access; bucket may be publicly accessible"
            ),
        }
    }
}
