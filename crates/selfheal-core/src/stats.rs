//! # Timing Samples
//!
//! Sample collection and the end-of-run summary. Only the arithmetic mean is
//! computed; an empty sequence has no mean.

use serde::Serialize;

/// Timing of one remediation round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingSample {
    /// Wall-clock latency observed by the driver.
    pub client_ms: u64,
    /// Processing time reported by the function itself, when it reports one.
    pub remediation_ms: Option<u64>,
}

/// Append-only sample sequences accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samples {
    client: Vec<u64>,
    remediation: Vec<u64>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. The remediation sequence only grows when a time was
    /// reported.
    pub fn record(&mut self, sample: TimingSample) {
        self.client.push(sample.client_ms);
        if let Some(ms) = sample.remediation_ms {
            self.remediation.push(ms);
        }
    }

    pub fn client(&self) -> &[u64] {
        &self.client
    }

    pub fn remediation(&self) -> &[u64] {
        &self.remediation
    }

    pub fn summarize(&self) -> Summary {
        Summary {
            client: SampleStats::from_samples(&self.client),
            remediation: SampleStats::from_samples(&self.remediation),
        }
    }
}

/// Count and mean of one sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub count: usize,
    pub mean_ms: Option<f64>,
}

impl SampleStats {
    pub fn from_samples(samples: &[u64]) -> Self {
        Self {
            count: samples.len(),
            mean_ms: mean(samples),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub client: SampleStats,
    pub remediation: SampleStats,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let total: u128 = samples.iter().map(|&s| u128::from(s)).sum();
    Some(total as f64 / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_values() {
        assert_eq!(mean(&[100, 200, 300]), Some(200.0));
        assert_eq!(mean(&[1, 2]), Some(1.5));
    }

    #[test]
    fn mean_of_empty_is_absent() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn remediation_sequence_only_grows_when_reported() {
        let mut samples = Samples::new();
        samples.record(TimingSample {
            client_ms: 10,
            remediation_ms: None,
        });
        samples.record(TimingSample {
            client_ms: 20,
            remediation_ms: Some(5),
        });

        assert_eq!(samples.client(), &[10, 20]);
        assert_eq!(samples.remediation(), &[5]);

        let summary = samples.summarize();
        assert_eq!(summary.client.count, 2);
        assert_eq!(summary.client.mean_ms, Some(15.0));
        assert_eq!(summary.remediation.count, 1);
        assert_eq!(summary.remediation.mean_ms, Some(5.0));
    }

    #[test]
    fn empty_run_summary() {
        let summary = Samples::new().summarize();
        assert!(summary.client.is_empty());
        assert_eq!(summary.client.mean_ms, None);
        assert!(summary.remediation.is_empty());
    }
}
