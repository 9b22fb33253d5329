use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use scout_core::{DateWindowFilter, JobRecord, ScrapeWindow};
use scout_logging::{scout_debug, scout_info, scout_warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::pace::{FixedDelay, RequestPacer, DEFAULT_REQUEST_DELAY};
use crate::parse::{parse_records, CssListingParser, ListingParser, SelectorError, SelectorSet};
use crate::{
    ListingFailure, NullProgressSink, ProgressSink, ScrapeEvent, ScrapeReport, SourceFailure,
};

/// Source of "now" for the date window.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Clone)]
pub struct AggregatorConfig {
    pub fetch: FetchSettings,
    pub selectors: SelectorSet,
    pub request_delay: Duration,
    pub now: Clock,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            selectors: SelectorSet::linkedin(),
            request_delay: DEFAULT_REQUEST_DELAY,
            now: Arc::new(Utc::now),
        }
    }
}

/// Fetches, parses and window-filters a sequence of source pages, one at a time.
///
/// Fetch and parse failures are recorded in the [`ScrapeReport`] and never
/// abort the run.
pub struct JobAggregator {
    fetcher: Arc<dyn Fetcher>,
    parser: Arc<dyn ListingParser>,
    pacer: Arc<dyn RequestPacer>,
    now: Clock,
    cancel: CancellationToken,
}

impl JobAggregator {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        parser: Arc<dyn ListingParser>,
        pacer: Arc<dyn RequestPacer>,
        now: Clock,
    ) -> Self {
        Self {
            fetcher,
            parser,
            pacer,
            now,
            cancel: CancellationToken::new(),
        }
    }

    pub fn from_config(config: AggregatorConfig) -> Result<Self, SelectorError> {
        let parser = CssListingParser::new(&config.selectors)?;
        Ok(Self::new(
            Arc::new(ReqwestFetcher::new(config.fetch)),
            Arc::new(parser),
            Arc::new(FixedDelay::new(config.request_delay)),
            config.now,
        ))
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops the run before the next source when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn run<S: AsRef<str>>(&self, urls: &[S], window: ScrapeWindow) -> ScrapeReport {
        self.run_with_sink(urls, window, &NullProgressSink).await
    }

    pub async fn run_with_sink<S: AsRef<str>>(
        &self,
        urls: &[S],
        window: ScrapeWindow,
        sink: &dyn ProgressSink,
    ) -> ScrapeReport {
        let filter = DateWindowFilter::new(window, (self.now)());
        let total = urls.len();
        let mut report = ScrapeReport::default();
        scout_info!(
            "Starting scrape of {} sources, window {} (cutoff {})",
            total,
            window,
            filter.cutoff()
        );

        for (index, url) in urls.iter().enumerate() {
            if index > 0 {
                tokio::select! {
                    _ = self.pacer.pause() => {}
                    _ = self.cancel.cancelled() => {}
                }
            }
            if self.cancel.is_cancelled() {
                scout_info!("Scrape cancelled after {} of {} sources", index, total);
                report.cancelled = true;
                break;
            }
            self.scrape_source(index, total, url.as_ref(), &filter, sink, &mut report)
                .await;
        }

        scout_info!(
            "Scrape finished: {} records, {}/{} sources reached, {} listings skipped",
            report.records.len(),
            report.sources_succeeded,
            report.sources_attempted,
            report.parse_failures.len()
        );
        report
    }

    async fn scrape_source(
        &self,
        index: usize,
        total: usize,
        url: &str,
        filter: &DateWindowFilter,
        sink: &dyn ProgressSink,
        report: &mut ScrapeReport,
    ) {
        report.sources_attempted += 1;
        sink.emit(ScrapeEvent::SourceStarted {
            index,
            total,
            url: url.to_string(),
        });

        let page = match self.fetcher.fetch_markup(url).await {
            Ok(page) => page,
            Err(error) => {
                scout_warn!("Error scraping {}: {}", url, error);
                let failure = SourceFailure {
                    url: url.to_string(),
                    error,
                };
                sink.emit(ScrapeEvent::SourceFailed(failure.clone()));
                report.fetch_failures.push(failure);
                return;
            }
        };
        report.sources_succeeded += 1;
        scout_debug!("Decoded {} as {}", url, page.encoding_label);

        let base = Url::parse(url).ok();
        let mut parsed = Vec::new();
        for result in parse_records(self.parser.as_ref(), &page.html) {
            match result {
                Ok(record) => parsed.push(absolutize_link(record, base.as_ref())),
                Err(error) => {
                    scout_warn!("Error parsing job listing on {}: {}", url, error);
                    let failure = ListingFailure {
                        url: url.to_string(),
                        error,
                    };
                    sink.emit(ScrapeEvent::ListingSkipped(failure.clone()));
                    report.parse_failures.push(failure);
                }
            }
        }

        let parsed_count = parsed.len();
        let retained = filter.filter(parsed);
        scout_info!(
            "{}: {} listings parsed, {} within window",
            url,
            parsed_count,
            retained.len()
        );
        sink.emit(ScrapeEvent::SourceCompleted {
            url: url.to_string(),
            parsed: parsed_count,
            retained: retained.len(),
        });
        report.records.extend(retained);
    }
}

fn absolutize_link(record: JobRecord, base: Option<&Url>) -> JobRecord {
    if record.link().is_empty() || Url::parse(record.link()).is_ok() {
        return record;
    }
    match base.and_then(|base| base.join(record.link()).ok()) {
        Some(joined) => JobRecord::new(
            record.title(),
            record.company(),
            record.posted(),
            joined.as_str(),
        ),
        None => record,
    }
}
