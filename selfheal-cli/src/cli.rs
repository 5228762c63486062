use clap::Parser;
use selfheal_core::{BenchResult, DEFAULT_ITERATIONS, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "selfheal-bench", version)]
#[command(
    about = "Iteratively disable S3 Block Public Access and time the remediation Lambda that restores it"
)]
pub struct Cli {
    /// Bucket whose Block Public Access settings are toggled
    #[arg(long, env = "SELFHEAL_BUCKET")]
    pub bucket: String,
    /// Remediation Lambda function name or ARN
    #[arg(long, env = "SELFHEAL_FUNCTION")]
    pub function: String,
    /// Number of iterations
    #[arg(long, env = "SELFHEAL_ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,
    /// AWS region (default: resolved from the environment/profile)
    #[arg(long)]
    pub region: Option<String>,
    /// Do not re-enable Block Public Access when a run fails mid-iteration
    #[arg(long)]
    pub no_restore: bool,
}

impl Cli {
    pub fn into_config(self) -> BenchResult<RunConfig> {
        Ok(RunConfig::new(self.bucket, self.function, self.iterations)?
            .with_region(self.region)
            .with_restore_on_failure(!self.no_restore))
    }
}
