use std::fmt;

use chrono::NaiveDate;

/// Calendar format used for posting dates, both when parsing and exporting.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One job posting extracted from a listing container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    title: String,
    company: String,
    posted: NaiveDate,
    link: String,
}

impl JobRecord {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        posted: NaiveDate,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            posted,
            link: link.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn posted(&self) -> NaiveDate {
        self.posted
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Posting date rendered as `YYYY-MM-DD`.
    pub fn posted_label(&self) -> String {
        self.posted.format(DATE_FORMAT).to_string()
    }
}

/// Trailing number of days a posting date must fall within to be retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScrapeWindow(u32);

impl ScrapeWindow {
    pub const fn days(days: u32) -> Self {
        Self(days)
    }

    pub fn as_days(self) -> u32 {
        self.0
    }
}

impl Default for ScrapeWindow {
    fn default() -> Self {
        Self(30)
    }
}

impl fmt::Display for ScrapeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
