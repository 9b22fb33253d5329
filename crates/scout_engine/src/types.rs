use std::fmt;
use std::sync::mpsc;

use scout_core::JobRecord;

use crate::parse::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "undecodable body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A source URL that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub url: String,
    pub error: FetchError,
}

/// A listing container on a fetched page that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFailure {
    pub url: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    SourceStarted {
        index: usize,
        total: usize,
        url: String,
    },
    SourceFailed(SourceFailure),
    ListingSkipped(ListingFailure),
    SourceCompleted {
        url: String,
        parsed: usize,
        retained: usize,
    },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ScrapeEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<ScrapeEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<ScrapeEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: ScrapeEvent) {
        let _ = self.tx.send(event);
    }
}

/// Sink for callers that only want the final report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: ScrapeEvent) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Found,
    /// At least one source was reached but nothing qualified.
    NoMatches,
    AllSourcesFailed,
    Cancelled,
}

/// Result of one aggregation run: the retained records plus every contained failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapeReport {
    pub records: Vec<JobRecord>,
    pub sources_attempted: usize,
    pub sources_succeeded: usize,
    pub fetch_failures: Vec<SourceFailure>,
    pub parse_failures: Vec<ListingFailure>,
    pub cancelled: bool,
}

impl ScrapeReport {
    pub fn outcome(&self) -> RunOutcome {
        if self.cancelled {
            RunOutcome::Cancelled
        } else if !self.records.is_empty() {
            RunOutcome::Found
        } else if self.sources_attempted > 0 && self.sources_succeeded == 0 {
            RunOutcome::AllSourcesFailed
        } else {
            RunOutcome::NoMatches
        }
    }
}
