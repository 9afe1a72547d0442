use std::fmt;
use std::time::Duration;

use harvester_core::{Link, MatchSet};

/// Why one document could not be checked for the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn class(&self) -> FailureClass {
        self.kind.class()
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    Decode,
}

/// Coarse split between transport problems and unreadable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Network,
    Decode,
}

impl FailureKind {
    pub fn class(&self) -> FailureClass {
        match self {
            FailureKind::Decode => FailureClass::Decode,
            _ => FailureClass::Network,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Fatal failures while walking the listing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HarvestError {
    #[error("render failed: {0}")]
    Render(String),
    #[error("selector {selector:?} not present after {waited:?}")]
    Timeout { selector: String, waited: Duration },
    #[error("listing could not be parsed: {0}")]
    Parse(String),
    #[error("listing still has a next page after {max_pages} pages")]
    PageLimitExceeded { max_pages: usize },
    #[error("no page renderer available: {0}")]
    Unsupported(String),
}

/// Result of checking one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Matched,
    NotMatched,
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    BatchStarted {
        index: usize,
        total_batches: usize,
        size: usize,
    },
    DocumentScanned {
        batch_index: usize,
        position: usize,
        batch_size: usize,
        link: Link,
        outcome: ScanOutcome,
    },
    /// A worker task died before reporting; its link counts as failed.
    WorkerLost {
        batch_index: usize,
        link: Link,
        message: String,
    },
    BatchFinished {
        index: usize,
        matched_so_far: usize,
    },
}

/// Matches plus bookkeeping for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterReport {
    pub matches: MatchSet,
    pub total: usize,
    pub scanned: usize,
    pub network_failures: usize,
    pub decode_failures: usize,
    pub lost_workers: usize,
}

impl FilterReport {
    pub fn failures(&self) -> usize {
        self.network_failures + self.decode_failures + self.lost_workers
    }
}
