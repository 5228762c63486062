use clap::Parser;
use selfheal_core::{
    BenchResult, BenchmarkDriver, PublicAccessControl, RemediationInvoker, RunConfig, Summary,
    report,
};
use std::error::Error;
use std::future::Future;
use std::io::Write;

mod cli;
mod shutdown;

use cli::Cli;
use shutdown::shutdown_signal;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize JSON logging once; stdout is reserved for the report.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("❌ Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Benchmark failed");
        eprintln!("❌ Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("   caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

async fn run(config: RunConfig) -> BenchResult<()> {
    let sdk_config = selfheal_aws::load_sdk_config(config.region.as_deref()).await;
    let (control, invoker) = selfheal_aws::clients(&sdk_config);
    let driver = BenchmarkDriver::new(config, control, invoker);

    let mut out = std::io::stdout();
    run_benchmark(&driver, &mut out, shutdown_signal()).await?;
    Ok(())
}

/// Run the benchmark and print the results block on success.
async fn run_benchmark<C, I, W, F>(
    driver: &BenchmarkDriver<C, I>,
    out: &mut W,
    shutdown: F,
) -> BenchResult<Summary>
where
    C: PublicAccessControl,
    I: RemediationInvoker,
    W: Write,
    F: Future<Output = ()>,
{
    let summary = driver.run_until(out, shutdown).await?;
    report::write_summary(out, &summary)?;
    out.flush()?;
    Ok(summary)
}
