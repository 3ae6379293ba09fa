//! Results file emission and console summary

use crate::error::ProbeError;
use crate::stats::FpsStats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wire form of the run statistics. Field order is stable and matches the
/// consumer-facing key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpsReport {
    #[serde(rename = "meanFPS")]
    pub mean_fps: f64,
    #[serde(rename = "minFPS")]
    pub min_fps: u64,
    #[serde(rename = "maxFPS")]
    pub max_fps: u64,
    #[serde(rename = "p95FPS")]
    pub p95_fps: u64,
    pub iterations: usize,
}

impl From<&FpsStats> for FpsReport {
    fn from(stats: &FpsStats) -> Self {
        FpsReport {
            mean_fps: stats.mean,
            min_fps: stats.min,
            max_fps: stats.max,
            p95_fps: stats.p95,
            iterations: stats.iterations,
        }
    }
}

impl FpsReport {
    /// Write the report as pretty JSON, creating missing parent directories
    /// and overwriting any existing file. Not atomic; a partial write on
    /// crash is an accepted risk.
    pub fn write(&self, path: &Path) -> Result<(), ProbeError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ProbeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_vec_pretty(self)?;
        fs::write(path, payload).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Human-readable per-stat lines on stdout. Presentation only.
    pub fn print_summary(&self) {
        println!("Mean FPS: {:.2}", self.mean_fps);
        println!("Min FPS: {}", self.min_fps);
        println!("Max FPS: {}", self.max_fps);
        println!("95th percentile: {}", self.p95_fps);
    }
}
