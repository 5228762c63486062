//! Human-readable progress lines and the results block.

use crate::stats::{SampleStats, Summary, TimingSample};
use std::io::{self, Write};

pub fn write_iteration_start<W: Write>(out: &mut W, iteration: u32, total: u32) -> io::Result<()> {
    writeln!(
        out,
        "Iteration {}/{} - disabling block public access...",
        iteration, total
    )
}

pub fn write_invoking<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invoking remediation function...")
}

pub fn write_sample<W: Write>(out: &mut W, sample: &TimingSample) -> io::Result<()> {
    match sample.remediation_ms {
        Some(ms) => writeln!(
            out,
            " -> client RTT: {} ms, remediation reported: {} ms",
            sample.client_ms, ms
        ),
        None => writeln!(
            out,
            " -> client RTT: {} ms, remediation timing not returned",
            sample.client_ms
        ),
    }
}

pub fn write_relocking<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Re-enabling block public access...\n")
}

/// Print the results block. The remediation line only appears when the
/// function reported at least one time.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "=== RESULTS ===")?;
    writeln!(
        out,
        "Client-side RTT over {} runs: avg = {}",
        summary.client.count,
        format_mean(&summary.client)
    )?;
    if !summary.remediation.is_empty() {
        writeln!(
            out,
            "Remediation-reported response time over {} runs: avg = {}",
            summary.remediation.count,
            format_mean(&summary.remediation)
        )?;
    }
    Ok(())
}

fn format_mean(stats: &SampleStats) -> String {
    match stats.mean_ms {
        Some(mean) => format!("{:.2} ms", mean),
        None => "n/a".to_string(),
    }
}
