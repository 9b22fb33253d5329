use std::io;
use std::sync::mpsc;
use std::thread;

use scout_core::ScrapeWindow;
use tokio_util::sync::CancellationToken;

use crate::aggregate::{AggregatorConfig, JobAggregator};
use crate::parse::SelectorError;
use crate::{ChannelProgressSink, ScrapeEvent, ScrapeReport};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start scrape worker: {0}")]
    Spawn(#[from] io::Error),
    #[error("invalid listing selectors: {0}")]
    Selectors(#[from] SelectorError),
    #[error("scrape worker panicked")]
    WorkerPanicked,
}

/// One aggregation run on a background thread, polled from a synchronous caller.
pub struct ScrapeHandle {
    event_rx: mpsc::Receiver<ScrapeEvent>,
    cancel: CancellationToken,
    worker: thread::JoinHandle<ScrapeReport>,
}

impl ScrapeHandle {
    pub fn spawn(
        config: AggregatorConfig,
        urls: Vec<String>,
        window: ScrapeWindow,
    ) -> Result<Self, EngineError> {
        let aggregator = JobAggregator::from_config(config)?;
        Self::spawn_with(aggregator, urls, window)
    }

    pub fn spawn_with(
        aggregator: JobAggregator,
        urls: Vec<String>,
        window: ScrapeWindow,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = aggregator.cancellation_token();

        let worker = thread::Builder::new()
            .name("scout-scrape".to_string())
            .spawn(move || {
                let sink = ChannelProgressSink::new(event_tx);
                runtime.block_on(aggregator.run_with_sink(&urls, window, &sink))
            })?;

        Ok(Self {
            event_rx,
            cancel,
            worker,
        })
    }

    pub fn try_recv(&self) -> Option<ScrapeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Every event emitted so far that has not been received yet.
    pub fn drain_events(&self) -> Vec<ScrapeEvent> {
        self.event_rx.try_iter().collect()
    }

    /// Stops the run before its next source; the current fetch completes.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the run ends and returns its report.
    pub fn join(self) -> Result<ScrapeReport, EngineError> {
        self.worker.join().map_err(|_| EngineError::WorkerPanicked)
    }
}
