use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use engine_logging::engine_info;
use harvester_core::{batch_count, partition_batches, KeywordMatcher, Link};
use tokio::task::{self, JoinSet};

use crate::config::ConfigError;
use crate::extract::TextExtractor;
use crate::fetch::DocumentFetcher;
use crate::progress::ProgressSink;
use crate::{FailureClass, FailureKind, FetchError, FilterReport, PipelineEvent, ScanOutcome};

pub const DEFAULT_KEYWORD: &str = "pay-to-play";

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub keyword: String,
    pub concurrency: usize,
    pub batch_size: usize,
    /// Pause after each batch has drained.
    pub batch_pause: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            concurrency: 8,
            batch_size: 1000,
            batch_pause: Duration::from_secs(2),
        }
    }
}

/// Fetches, extracts and keyword-checks links in sequential batches with a
/// bounded number of documents in flight.
pub struct ContentFilterPipeline {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn TextExtractor>,
    matcher: Arc<KeywordMatcher>,
    concurrency: NonZeroUsize,
    batch_size: NonZeroUsize,
    batch_pause: Duration,
}

impl ContentFilterPipeline {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn TextExtractor>,
        settings: PipelineSettings,
    ) -> Result<Self, ConfigError> {
        let concurrency = NonZeroUsize::new(settings.concurrency)
            .ok_or(ConfigError::ZeroValue("concurrency"))?;
        let batch_size =
            NonZeroUsize::new(settings.batch_size).ok_or(ConfigError::ZeroValue("batch_size"))?;
        Ok(Self {
            fetcher,
            extractor,
            matcher: Arc::new(KeywordMatcher::new(settings.keyword)),
            concurrency,
            batch_size,
            batch_pause: settings.batch_pause,
        })
    }

    pub fn keyword(&self) -> &str {
        self.matcher.keyword()
    }

    /// Returns the links whose document text contains the keyword.
    ///
    /// Per-document failures are reported to `sink` and counted, never
    /// propagated. Matches keep batch order; inside a batch they appear in
    /// completion order.
    pub async fn filter(&self, links: &[Link], sink: &dyn ProgressSink) -> FilterReport {
        let total_batches = batch_count(links.len(), self.batch_size);
        engine_info!(
            "Filtering {} links with {} workers in {} batches",
            links.len(),
            self.concurrency,
            total_batches
        );

        let mut report = FilterReport {
            total: links.len(),
            ..FilterReport::default()
        };

        for (index, batch) in partition_batches(links, self.batch_size).enumerate() {
            sink.emit(PipelineEvent::BatchStarted {
                index,
                total_batches,
                size: batch.len(),
            });
            self.run_batch(index, batch, sink, &mut report).await;
            sink.emit(PipelineEvent::BatchFinished {
                index,
                matched_so_far: report.matches.len(),
            });
            if !self.batch_pause.is_zero() {
                tokio::time::sleep(self.batch_pause).await;
            }
        }

        report
    }

    /// Runs one batch to completion; no task outlives this call.
    async fn run_batch(
        &self,
        batch_index: usize,
        batch: &[Link],
        sink: &dyn ProgressSink,
        report: &mut FilterReport,
    ) {
        let mut pending = batch.iter().cloned();
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<task::Id, Link> = HashMap::new();
        let mut position = 0;

        loop {
            while tasks.len() < self.concurrency.get() {
                let Some(link) = pending.next() else { break };
                let handle = tasks.spawn(scan_link(
                    self.fetcher.clone(),
                    self.extractor.clone(),
                    self.matcher.clone(),
                    link.clone(),
                ));
                in_flight.insert(handle.id(), link);
            }

            let Some(joined) = tasks.join_next_with_id().await else {
                break;
            };
            let (id, result) = match joined {
                Ok((id, outcome)) => (id, Ok(outcome)),
                Err(err) => (err.id(), Err(err)),
            };
            let Some(link) = in_flight.remove(&id) else {
                continue;
            };
            position += 1;

            match result {
                Ok(outcome) => {
                    report.scanned += 1;
                    match &outcome {
                        ScanOutcome::Matched => report.matches.push(link.clone()),
                        ScanOutcome::NotMatched => {}
                        ScanOutcome::Failed(err) => match err.class() {
                            FailureClass::Network => report.network_failures += 1,
                            FailureClass::Decode => report.decode_failures += 1,
                        },
                    }
                    sink.emit(PipelineEvent::DocumentScanned {
                        batch_index,
                        position,
                        batch_size: batch.len(),
                        link,
                        outcome,
                    });
                }
                Err(err) => {
                    report.lost_workers += 1;
                    sink.emit(PipelineEvent::WorkerLost {
                        batch_index,
                        link,
                        message: err.to_string(),
                    });
                }
            }
        }
    }
}

async fn scan_link(
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn TextExtractor>,
    matcher: Arc<KeywordMatcher>,
    link: Link,
) -> ScanOutcome {
    match fetch_text(fetcher.as_ref(), extractor, &link).await {
        Ok(text) if matcher.matches(&text) => ScanOutcome::Matched,
        Ok(_) => ScanOutcome::NotMatched,
        Err(err) => ScanOutcome::Failed(err),
    }
}

async fn fetch_text(
    fetcher: &dyn DocumentFetcher,
    extractor: Arc<dyn TextExtractor>,
    link: &Link,
) -> Result<String, FetchError> {
    let bytes = fetcher.fetch(link.as_str()).await?;
    // PDF decoding is CPU-bound; keep it off the I/O workers.
    tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?
}
