//! Browser session acquisition via the Chrome DevTools Protocol

use crate::config::Config;
use crate::error::ProbeError;
use crate::sampler::{frame_count_script, FrameSampler};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A launched browser with one navigated page, held for the duration of a
/// run. Acquired once at startup and released on the normal exit path only;
/// an error exit terminates the process without cleanup.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    driver: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch the browser, navigate to the target page, and wait out the
    /// settle delay so the page's rendering loop is up before sampling.
    pub async fn launch(config: &Config) -> Result<Self, ProbeError> {
        let mut builder = BrowserConfig::builder().args(config.browser.args.clone());
        if !config.browser.headless {
            builder = builder.with_head();
        }
        let launch_config = builder.build().map_err(ProbeError::Launch)?;

        let (browser, mut handler) = Browser::launch(launch_config)
            .await
            .map_err(|e| ProbeError::Launch(e.to_string()))?;

        // The CDP event stream must be polled for the session to make
        // progress; it ends when the browser closes.
        let driver = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ProbeError::Launch(e.to_string()))?;

        let url = config.target.url.as_str();
        page.goto(url).await.map_err(|source| ProbeError::Navigation {
            url: url.to_string(),
            source,
        })?;
        page.wait_for_navigation()
            .await
            .map_err(|source| ProbeError::Navigation {
                url: url.to_string(),
                source,
            })?;
        info!(url, "page loaded");

        debug!(
            settle_delay_seconds = config.target.settle_delay_seconds,
            "waiting for page to settle"
        );
        tokio::time::sleep(Duration::from_secs(config.target.settle_delay_seconds)).await;

        Ok(Self { browser, page, driver })
    }

    /// Close the browser and join the event-stream task.
    pub async fn close(mut self) -> Result<(), ProbeError> {
        self.browser.close().await.map_err(ProbeError::Close)?;
        let _ = self.driver.await;
        info!("browser session closed");
        Ok(())
    }
}

#[async_trait::async_trait]
impl FrameSampler for BrowserSession {
    /// One in-page evaluation per window: the script resolves with the frame
    /// count once the window elapses, marshalled back as a plain integer.
    async fn count_frames(&self, window_ms: u64) -> Result<u64, ProbeError> {
        let result = self.page.evaluate(frame_count_script(window_ms)).await?;
        // A value that fails to deserialize is still an evaluation fault,
        // not a report-serialization one.
        let frames: u64 = result
            .into_value()
            .map_err(chromiumoxide::error::CdpError::from)?;
        Ok(frames)
    }
}
