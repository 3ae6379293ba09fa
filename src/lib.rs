//! frameprobe: headless-browser animation-frame rate measurement harness
//!
//! Drives a browser to the page under test, counts animation-frame callbacks
//! over fixed one-second windows, reduces the counts to summary statistics
//! and writes them to a JSON results file.

pub mod browser;
pub mod config;
pub mod error;
pub mod report;
pub mod sampler;
pub mod stats;

pub use error::ProbeError;
