use engine_logging::{engine_info, engine_warn};

use crate::{PipelineEvent, ScanOutcome};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: PipelineEvent) {}
}

/// Reports pipeline progress on the operator log.
#[derive(Debug, Clone)]
pub struct LogProgressSink {
    keyword: String,
}

impl LogProgressSink {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::BatchStarted {
                index,
                total_batches,
                size,
            } => {
                engine_info!(
                    "Processing batch {}/{} ({} links)",
                    index + 1,
                    total_batches,
                    size
                );
            }
            PipelineEvent::DocumentScanned {
                position,
                batch_size,
                link,
                outcome,
                ..
            } => match outcome {
                ScanOutcome::Matched => {
                    engine_info!("[{}/{}] Processed: {}", position, batch_size, link);
                    engine_info!("   FOUND! includes '{}'.", self.keyword);
                }
                ScanOutcome::NotMatched => {
                    engine_info!("[{}/{}] Processed: {}", position, batch_size, link);
                }
                ScanOutcome::Failed(err) => {
                    engine_warn!("[{}/{}] {} failed: {}", position, batch_size, link, err);
                }
            },
            PipelineEvent::WorkerLost {
                batch_index,
                link,
                message,
            } => {
                engine_warn!(
                    "worker for {} in batch {} lost: {}",
                    link,
                    batch_index + 1,
                    message
                );
            }
            PipelineEvent::BatchFinished {
                index,
                matched_so_far,
            } => {
                engine_info!(
                    "Batch {} done, {} matches so far",
                    index + 1,
                    matched_so_far
                );
            }
        }
    }
}
