//! Error taxonomy for the measurement pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while driving the browser and reducing samples.
///
/// None of these are recovered internally; every variant is fatal and
/// propagates to the top level, which logs it and exits non-zero.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The browser session could not be created.
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// The target page was unreachable or never finished loading.
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        source: chromiumoxide::error::CdpError,
    },

    /// In-page measurement code threw, the session dropped mid-window, or
    /// the evaluated value could not be marshalled back as a frame count.
    #[error("in-page evaluation failed: {0}")]
    Evaluation(#[from] chromiumoxide::error::CdpError),

    /// The browser session could not be released cleanly.
    #[error("failed to close browser session: {0}")]
    Close(chromiumoxide::error::CdpError),

    /// Zero iterations configured, or statistics asked for on no samples.
    #[error("sample set is empty (iteration count must be at least 1)")]
    EmptySampleSet,

    /// The stats report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The results file could not be written.
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
