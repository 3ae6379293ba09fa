//! Animation-frame sampling loop

use crate::error::ProbeError;
use tracing::debug;

/// One measurement window: count animation-frame callbacks until the window
/// elapses and hand the count back.
///
/// Implementors issue a single outstanding request per window; the loop in
/// [`collect_samples`] never overlaps windows.
#[async_trait::async_trait]
pub trait FrameSampler: Send + Sync {
    async fn count_frames(&self, window_ms: u64) -> Result<u64, ProbeError>;
}

/// In-page counting script for one measurement window.
///
/// An explicit bounded loop with an elapsed-time guard: each pass awaits one
/// animation-frame promise, and the loop stops once elapsed wall-clock time
/// reaches the window length. If no frame callback ever fires the promise
/// never resolves and the window blocks forever; that is an accepted fatal
/// condition to be diagnosed out of band.
pub fn frame_count_script(window_ms: u64) -> String {
    format!(
        r#"(async () => {{
    const windowMs = {window_ms};
    const nextFrame = () => new Promise(resolve => requestAnimationFrame(resolve));
    const start = performance.now();
    let frames = 0;
    while (performance.now() - start < windowMs) {{
        await nextFrame();
        frames += 1;
    }}
    return frames;
}})()"#
    )
}

/// Run `iterations` strictly sequential measurement windows and collect the
/// per-window frame counts in completion order.
///
/// A zero iteration count is rejected before the loop starts. Any window
/// failure aborts immediately; partial samples are discarded with the error.
pub async fn collect_samples<S: FrameSampler>(
    sampler: &S,
    iterations: u32,
    window_ms: u64,
) -> Result<Vec<u64>, ProbeError> {
    if iterations == 0 {
        return Err(ProbeError::EmptySampleSet);
    }

    let mut samples = Vec::with_capacity(iterations as usize);
    for iteration in 0..iterations {
        let frames = sampler.count_frames(window_ms).await?;
        debug!(iteration = iteration + 1, frames, "measurement window complete");
        samples.push(frames);
    }
    Ok(samples)
}
