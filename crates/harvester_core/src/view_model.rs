use crate::HarvestPhase;

/// Snapshot of harvest progress for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarvestView {
    pub phase: HarvestPhase,
    pub pages_visited: usize,
    pub link_count: usize,
}
