use crate::view_model::HarvestView;
use crate::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarvestPhase {
    #[default]
    Running,
    Finished,
    Aborted,
}

/// Traversal cursor of the listing harvester.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarvestState {
    links: Vec<Link>,
    pages_visited: usize,
    phase: HarvestPhase,
    max_pages: Option<usize>,
}

impl HarvestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that refuses to advance past `max_pages` parsed pages.
    pub fn with_page_limit(max_pages: Option<usize>) -> Self {
        Self {
            max_pages,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> HarvestPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == HarvestPhase::Running
    }

    pub fn pages_visited(&self) -> usize {
        self.pages_visited
    }

    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    pub fn view(&self) -> HarvestView {
        HarvestView {
            phase: self.phase,
            pages_visited: self.pages_visited,
            link_count: self.links.len(),
        }
    }

    pub(crate) fn record_page(&mut self, row_links: Vec<Link>) {
        self.pages_visited += 1;
        self.links.extend(row_links);
    }

    pub(crate) fn finish(&mut self) {
        self.phase = HarvestPhase::Finished;
    }

    pub(crate) fn abort(&mut self) {
        self.phase = HarvestPhase::Aborted;
    }

    pub(crate) fn limit_reached(&self) -> bool {
        self.max_pages
            .is_some_and(|max_pages| self.pages_visited >= max_pages)
    }
}
