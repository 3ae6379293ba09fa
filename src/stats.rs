//! Summary statistics over a completed sample set

use crate::error::ProbeError;

/// Reduced view of one run: four summary values plus the sample count that
/// produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FpsStats {
    pub mean: f64,
    pub min: u64,
    pub max: u64,
    pub p95: u64,
    pub iterations: usize,
}

impl FpsStats {
    /// Reduce a sample set to summary statistics.
    ///
    /// `p95` uses the nearest-rank method: the value at index
    /// `floor(0.95 * N)` of the samples sorted ascending, no interpolation.
    /// The input is not mutated; an empty set is an error, not a NaN.
    pub fn from_samples(samples: &[u64]) -> Result<Self, ProbeError> {
        if samples.is_empty() {
            return Err(ProbeError::EmptySampleSet);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let sum: u64 = sorted.iter().sum();
        let mean = sum as f64 / n as f64;
        let p95 = sorted[n * 95 / 100];

        Ok(FpsStats {
            mean,
            min: sorted[0],
            max: sorted[n - 1],
            p95,
            iterations: n,
        })
    }
}
