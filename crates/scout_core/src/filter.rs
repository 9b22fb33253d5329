use chrono::{DateTime, Days, NaiveTime, Utc};

use crate::{JobRecord, ScrapeWindow};

/// Retains records whose posting date, taken as midnight UTC, is at or after
/// `now - window`.
///
/// A posting dated exactly `window` days ago is kept only when `now` falls
/// on midnight. There is no upper bound: postings dated in the future are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindowFilter {
    cutoff: DateTime<Utc>,
}

impl DateWindowFilter {
    pub fn new(window: ScrapeWindow, now: DateTime<Utc>) -> Self {
        let cutoff = now
            .checked_sub_days(Days::new(u64::from(window.as_days())))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { cutoff }
    }

    /// Earliest instant a posting's midnight may fall on and still be retained.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn retains(&self, record: &JobRecord) -> bool {
        record.posted().and_time(NaiveTime::MIN).and_utc() >= self.cutoff
    }

    /// Keeps the qualifying records in their input order.
    pub fn filter(&self, records: Vec<JobRecord>) -> Vec<JobRecord> {
        records
            .into_iter()
            .filter(|record| self.retains(record))
            .collect()
    }
}

/// Convenience wrapper over [`DateWindowFilter`] for one-shot filtering.
pub fn filter_recent(
    records: Vec<JobRecord>,
    window: ScrapeWindow,
    now: DateTime<Utc>,
) -> Vec<JobRecord> {
    DateWindowFilter::new(window, now).filter(records)
}
