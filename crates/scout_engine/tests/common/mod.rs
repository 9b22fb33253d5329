#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use scout_engine::{
    Clock, CssListingParser, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher,
    JobAggregator, ProgressSink, RequestPacer, ScrapeEvent,
};

pub fn init_logging() {
    scout_logging::initialize_for_tests();
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Clock {
    Arc::new(fixed_now)
}

pub fn days_ago(days: u64) -> NaiveDate {
    fixed_now().date_naive().checked_sub_days(Days::new(days)).unwrap()
}

/// `datetime` attribute in the shape the job board emits.
pub fn datetime_days_ago(days: u64) -> String {
    format!("{}T08:30:00", days_ago(days).format("%Y-%m-%d"))
}

/// One job card; `datetime: None` omits the `<time>` element.
pub fn card(title: &str, company: &str, datetime: Option<&str>, link: &str) -> String {
    let time = datetime
        .map(|d| format!(r#"<time class="job-search-card__listdate" datetime="{d}">2 weeks ago</time>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="base-card relative job-search-card">
  <a class="base-card__full-link absolute" href="{link}"><span class="sr-only">{title}</span></a>
  <div class="base-search-card__info">
    <h3 class="base-search-card__title">
      {title}
    </h3>
    <h4 class="base-search-card__subtitle">
      <a class="hidden-nested-link">{company}</a>
    </h4>
    <div class="base-search-card__metadata">{time}</div>
  </div>
</div>"#
    )
}

pub fn page(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Jobs</title></head><body><ul class=\"jobs-search__results-list\">{}</ul></body></html>",
        cards
            .iter()
            .map(|c| format!("<li>{c}</li>"))
            .collect::<String>()
    )
}

/// Serves canned pages by URL; unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Result<String, FailureKind>>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), Ok(html));
        self
    }

    pub fn failing(mut self, url: &str, kind: FailureKind) -> Self {
        self.pages.insert(url.to_string(), Err(kind));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(FetchOutput {
                bytes: html.as_bytes().to_vec(),
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    redirect_count: 0,
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    byte_len: html.len() as u64,
                },
            }),
            Some(Err(kind)) => Err(FetchError::new(kind.clone(), "stubbed failure")),
            None => Err(FetchError::new(FailureKind::Network, "connection refused")),
        }
    }
}

#[derive(Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RequestPacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ScrapeEvent>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<ScrapeEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: ScrapeEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn aggregator(fetcher: Arc<StubFetcher>, pacer: Arc<CountingPacer>) -> JobAggregator {
    JobAggregator::new(
        fetcher,
        Arc::new(CssListingParser::linkedin().unwrap()),
        pacer,
        fixed_clock(),
    )
}
