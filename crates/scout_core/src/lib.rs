//! Scout core: pure job data model, date-window filtering and session URL state.
mod filter;
mod record;
mod urls;

pub use filter::{filter_recent, DateWindowFilter};
pub use record::{JobRecord, ScrapeWindow, DATE_FORMAT};
pub use urls::{AddOutcome, UrlList};
