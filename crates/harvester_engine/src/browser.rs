//! Headless Chromium renderer, enabled with the `browser` feature.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetUserAgentOverrideParams;
use chromiumoxide::Page;
use engine_logging::{engine_debug, engine_warn};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

use crate::render::PageRenderer;
use crate::HarvestError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChromiumRenderer {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Page,
}

impl ChromiumRenderer {
    /// Launches a headless browser with one blank page using `user_agent`.
    pub async fn launch(user_agent: &str) -> Result<Self, HarvestError> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(HarvestError::Render)?;
        let (browser, mut events) = Browser::launch(config).await.map_err(render_error)?;

        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(err) = event {
                    engine_debug!("browser handler stopped: {}", err);
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await.map_err(render_error)?;
        page.set_user_agent(SetUserAgentOverrideParams::new(user_agent))
            .await
            .map_err(render_error)?;

        Ok(Self {
            browser,
            handler,
            page,
        })
    }

    pub async fn close(mut self) {
        if let Err(err) = self.browser.close().await {
            engine_warn!("failed to close browser: {}", err);
        }
        self.handler.abort();
    }
}

#[async_trait::async_trait]
impl PageRenderer for ChromiumRenderer {
    async fn open(&mut self, url: &str) -> Result<(), HarvestError> {
        self.page.goto(url).await.map_err(render_error)?;
        self.page.wait_for_navigation().await.map_err(render_error)?;
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), HarvestError> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarvestError::Timeout {
                    selector: selector.to_string(),
                    waited: timeout,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn content(&mut self) -> Result<String, HarvestError> {
        self.page.content().await.map_err(render_error)
    }

    async fn click(&mut self, selector: &str) -> Result<(), HarvestError> {
        let element = self.page.find_element(selector).await.map_err(render_error)?;
        element.click().await.map_err(render_error)?;
        Ok(())
    }
}

fn render_error(err: impl std::fmt::Display) -> HarvestError {
    HarvestError::Render(err.to_string())
}
