//! Harvester core: pure pagination state machine, batching and keyword matching.
mod batch;
mod effect;
mod keyword;
mod link;
mod match_set;
mod msg;
mod state;
mod update;
mod view_model;

pub use batch::{batch_count, partition_batches};
pub use effect::Effect;
pub use keyword::{matches, KeywordMatcher};
pub use link::Link;
pub use match_set::MatchSet;
pub use msg::Msg;
pub use state::{HarvestPhase, HarvestState};
pub use update::update;
pub use view_model::HarvestView;
