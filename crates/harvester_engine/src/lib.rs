//! Harvester engine: listing traversal, document fetching and keyword filtering.
#[cfg(feature = "browser")]
mod browser;
mod config;
mod extract;
mod fetch;
mod harvest;
mod listing;
mod persist;
mod pipeline;
mod progress;
mod render;
mod types;

#[cfg(feature = "browser")]
pub use browser::ChromiumRenderer;
pub use config::{
    ConfigError, FetchConfig, FilterConfig, ListingConfig, OutputConfig, RunConfig,
    DEFAULT_LISTING_URL,
};
pub use extract::{PdfTextExtractor, TextExtractor};
pub use fetch::{DocumentFetcher, FetchSettings, ReqwestFetcher};
pub use harvest::{HarvestSettings, LinkHarvester};
pub use listing::{ListingPage, ListingParser, SelectorListingParser};
pub use persist::{ensure_output_dir, write_links_csv, AtomicFileWriter, PersistError};
pub use pipeline::{ContentFilterPipeline, PipelineSettings, DEFAULT_KEYWORD};
pub use progress::{LogProgressSink, NullProgressSink, ProgressSink};
pub use render::PageRenderer;
pub use types::{
    FailureClass, FailureKind, FetchError, FilterReport, HarvestError, PipelineEvent, ScanOutcome,
};
