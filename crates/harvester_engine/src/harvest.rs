use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use harvester_core::{update, Effect, HarvestState, HarvestView, Link, Msg};

use crate::listing::ListingParser;
use crate::render::PageRenderer;
use crate::HarvestError;

#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub listing_url: String,
    /// Must be present before a page is read; the renderer may hand back a
    /// shell page before the table is populated.
    pub table_selector: String,
    pub next_selector: String,
    /// Pause before reading each page.
    pub page_delay: Duration,
    pub render_timeout: Duration,
    pub max_pages: Option<usize>,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            listing_url: crate::config::DEFAULT_LISTING_URL.to_string(),
            table_selector: crate::config::DEFAULT_TABLE_SELECTOR.to_string(),
            next_selector: crate::config::DEFAULT_NEXT_SELECTOR.to_string(),
            page_delay: Duration::from_secs(2),
            render_timeout: Duration::from_secs(30),
            max_pages: None,
        }
    }
}

/// Walks a paginated listing and collects every row link.
///
/// Owns its renderer: each page is rendered, read and (when another page
/// exists) advanced before anything else touches the session.
pub struct LinkHarvester<R, P> {
    renderer: R,
    parser: P,
    settings: HarvestSettings,
}

impl<R: PageRenderer, P: ListingParser> LinkHarvester<R, P> {
    pub fn new(renderer: R, parser: P, settings: HarvestSettings) -> Self {
        Self {
            renderer,
            parser,
            settings,
        }
    }

    /// Hands the renderer back, e.g. to close the browser.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Links of every page in listing order. Any render or parse failure
    /// aborts the whole harvest; a partial link set is never returned.
    pub async fn harvest(&mut self) -> Result<Vec<Link>, HarvestError> {
        self.renderer.open(&self.settings.listing_url).await?;
        let mut state = HarvestState::with_page_limit(self.settings.max_pages);

        loop {
            if !self.settings.page_delay.is_zero() {
                tokio::time::sleep(self.settings.page_delay).await;
            }
            self.renderer
                .wait_for_selector(&self.settings.table_selector, self.settings.render_timeout)
                .await?;
            let html = self.renderer.content().await?;
            let page = self.parser.parse(&html)?;

            for link in &page.row_links {
                engine_info!("{}", link);
            }

            let (next, effects) = update(
                state,
                Msg::PageParsed {
                    row_links: page.row_links,
                    has_next_page: page.has_next_page,
                },
            );
            state = next;
            log_progress(state.view());

            for effect in effects {
                match effect {
                    Effect::AdvancePage => {
                        self.renderer.click(&self.settings.next_selector).await?;
                    }
                    Effect::Finish => {
                        engine_info!(
                            "Harvest finished: {} links on {} pages",
                            state.links().len(),
                            state.pages_visited()
                        );
                        return Ok(state.into_links());
                    }
                    Effect::PageLimitReached { max_pages } => {
                        return Err(HarvestError::PageLimitExceeded { max_pages });
                    }
                }
            }
        }
    }
}

fn log_progress(view: HarvestView) {
    engine_debug!(
        "page {} parsed, {} links so far",
        view.pages_visited,
        view.link_count
    );
}
