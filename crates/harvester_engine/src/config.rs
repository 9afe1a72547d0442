//! Run configuration: a RON file with every field optional, overridden by
//! command-line flags in the binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::{FetchSettings, DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
use crate::harvest::HarvestSettings;
use crate::pipeline::{PipelineSettings, DEFAULT_KEYWORD};

pub const DEFAULT_LISTING_URL: &str =
    "https://www.sec.gov/enforcement-litigation/administrative-proceedings";
pub const DEFAULT_TABLE_SELECTOR: &str = "table.usa-table tbody";
pub const DEFAULT_ROW_SELECTOR: &str = "table.usa-table tbody tr.pr-list-page-row";
pub const DEFAULT_LINK_SELECTOR: &str = "a";
pub const DEFAULT_NEXT_SELECTOR: &str = "a[aria-label='Next page']";
pub const DEFAULT_OUTPUT_PATH: &str = "links.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("invalid config file {path:?}: {message}")]
    Syntax { path: PathBuf, message: String },
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
    #[error("invalid url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("invalid css selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("invalid value for header {name}: {message}")]
    InvalidHeader { name: String, message: String },
    #[error("http client could not be built: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub listing: ListingConfig,
    pub filter: FilterConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub url: String,
    pub table_selector: String,
    pub row_selector: String,
    pub link_selector: String,
    pub next_selector: String,
    pub page_delay_ms: u64,
    pub render_timeout_ms: u64,
    pub max_pages: Option<usize>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LISTING_URL.to_string(),
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            next_selector: DEFAULT_NEXT_SELECTOR.to_string(),
            page_delay_ms: 2_000,
            render_timeout_ms: 30_000,
            max_pages: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub target_keyword: String,
    pub max_workers: usize,
    pub batch_size: usize,
    pub batch_pause_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            target_keyword: DEFAULT_KEYWORD.to_string(),
            max_workers: 8,
            batch_size: 1000,
            batch_pause_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub max_bytes: u64,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 15_000,
            connect_timeout_ms: 10_000,
            max_bytes: 64 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RunConfig {
    /// Reads a RON config file. Fields it omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_ron(&content).map_err(|message| ConfigError::Syntax {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_ron(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.max_workers == 0 {
            return Err(ConfigError::ZeroValue("max_workers"));
        }
        if self.filter.batch_size == 0 {
            return Err(ConfigError::ZeroValue("batch_size"));
        }
        if self.fetch.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroValue("request_timeout_ms"));
        }
        if self.listing.max_pages == Some(0) {
            return Err(ConfigError::ZeroValue("max_pages"));
        }
        url::Url::parse(&self.listing.url).map_err(|err| ConfigError::InvalidUrl {
            url: self.listing.url.clone(),
            message: err.to_string(),
        })?;
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_millis(self.fetch.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.fetch.request_timeout_ms),
            max_bytes: self.fetch.max_bytes,
            user_agent: self.fetch.user_agent.clone(),
            accept: self.fetch.accept.clone(),
            accept_language: self.fetch.accept_language.clone(),
        }
    }

    pub fn harvest_settings(&self) -> HarvestSettings {
        HarvestSettings {
            listing_url: self.listing.url.clone(),
            table_selector: self.listing.table_selector.clone(),
            next_selector: self.listing.next_selector.clone(),
            page_delay: Duration::from_millis(self.listing.page_delay_ms),
            render_timeout: Duration::from_millis(self.listing.render_timeout_ms),
            max_pages: self.listing.max_pages,
        }
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            keyword: self.filter.target_keyword.clone(),
            concurrency: self.filter.max_workers,
            batch_size: self.filter.batch_size,
            batch_pause: Duration::from_millis(self.filter.batch_pause_ms),
        }
    }
}

impl ListingConfig {
    /// Parser for this listing's markup, resolving relative links against `url`.
    pub fn parser(&self) -> Result<crate::SelectorListingParser, ConfigError> {
        crate::SelectorListingParser::new(
            &self.row_selector,
            &self.link_selector,
            &self.next_selector,
        )?
        .with_base_url(&self.url)
    }
}
