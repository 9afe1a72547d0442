use std::path::PathBuf;

use clap::Parser;
use harvester_engine::RunConfig;
use log::LevelFilter;

use crate::logging::LogDestination;

/// Harvest document links from a paginated listing and keep those whose
/// text contains a keyword.
#[derive(Debug, Parser)]
#[command(name = "harvester", version)]
pub struct Cli {
    /// RON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listing page to start harvesting from
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Filter these links (one per line) instead of harvesting the listing
    #[arg(long)]
    pub links_file: Option<PathBuf>,

    /// Phrase to look for, case-insensitively
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Documents processed concurrently within a batch
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Links per batch
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Per-document request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Stop with an error after this many listing pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// CSV file receiving the matched links
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Writes every flag that was given over the file (or default) config.
    pub fn apply_overrides(&self, config: &mut RunConfig) {
        if let Some(url) = &self.listing_url {
            config.listing.url = url.clone();
        }
        if let Some(keyword) = &self.keyword {
            config.filter.target_keyword = keyword.clone();
        }
        if let Some(workers) = self.workers {
            config.filter.max_workers = workers;
        }
        if let Some(batch_size) = self.batch_size {
            config.filter.batch_size = batch_size;
        }
        if let Some(secs) = self.timeout_secs {
            config.fetch.request_timeout_ms = secs.saturating_mul(1000);
        }
        if let Some(max_pages) = self.max_pages {
            config.listing.max_pages = Some(max_pages);
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
    }
}
