//! Sampling-loop tests against a scripted sampler

use async_trait::async_trait;
use frameprobe::sampler::{collect_samples, frame_count_script, FrameSampler};
use frameprobe::ProbeError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

enum Outcome {
    Frames(u64),
    Disconnect,
}

/// Replays a fixed sequence of window outcomes.
struct ScriptedSampler {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: AtomicU32,
}

impl ScriptedSampler {
    fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicU32::new(0),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrameSampler for ScriptedSampler {
    async fn count_frames(&self, _window_ms: u64) -> Result<u64, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Outcome::Frames(n)) => Ok(n),
            Some(Outcome::Disconnect) => Err(ProbeError::Evaluation(
                chromiumoxide::error::CdpError::from(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "session disconnected",
                )),
            )),
            None => panic!("sampler invoked more times than scripted"),
        }
    }
}

#[tokio::test]
async fn test_loop_produces_n_samples_in_completion_order() {
    let sampler = ScriptedSampler::new(vec![
        Outcome::Frames(58),
        Outcome::Frames(61),
        Outcome::Frames(60),
    ]);
    let samples = collect_samples(&sampler, 3, 1000).await.unwrap();
    assert_eq!(samples, vec![58, 61, 60]);
    assert_eq!(sampler.calls(), 3);
}

#[tokio::test]
async fn test_zero_iterations_rejected_before_sampling() {
    let sampler = ScriptedSampler::new(vec![]);
    let result = collect_samples(&sampler, 0, 1000).await;
    assert!(matches!(result, Err(ProbeError::EmptySampleSet)));
    assert_eq!(sampler.calls(), 0, "loop must be rejected eagerly");
}

#[tokio::test]
async fn test_failure_mid_run_aborts_and_discards_partial_samples() {
    let sampler = ScriptedSampler::new(vec![
        Outcome::Frames(60),
        Outcome::Frames(59),
        Outcome::Disconnect,
    ]);
    let result = collect_samples(&sampler, 60, 1000).await;
    assert!(matches!(result, Err(ProbeError::Evaluation(_))));
    // Aborted on iteration 3; nothing ran after the failure
    assert_eq!(sampler.calls(), 3);
}

#[test]
fn test_script_counts_with_elapsed_time_guard() {
    let script = frame_count_script(1000);
    assert!(script.contains("requestAnimationFrame"));
    assert!(script.contains("performance.now()"));
    assert!(script.contains("const windowMs = 1000;"));
}
