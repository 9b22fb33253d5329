//! Scout engine: fetch, parse and aggregate job listings; persist named URL lists.
mod aggregate;
mod decode;
mod engine;
mod export;
mod fetch;
mod pace;
mod parse;
mod persist;
mod store;
mod types;

pub use aggregate::{AggregatorConfig, Clock, JobAggregator};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use engine::{EngineError, ScrapeHandle};
pub use export::{records_to_csv, write_csv_export, ExportError, ExportOptions, CSV_HEADER};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use pace::{FixedDelay, RequestPacer, DEFAULT_REQUEST_DELAY};
pub use parse::{
    parse_records, CssListingParser, ListingParser, ParseError, RawListing, SelectorError,
    SelectorSet,
};
pub use persist::{write_atomic, AtomicFileWriter, PersistError};
pub use store::{NamedListStore, NamedLists, StoreError};
pub use types::{
    ChannelProgressSink, FailureKind, FetchError, FetchMetadata, FetchOutput, ListingFailure,
    NullProgressSink, ProgressSink, RunOutcome, ScrapeEvent, ScrapeReport, SourceFailure,
};
