use std::time::Duration;

/// Pause between consecutive source pages.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(3);

/// Politeness gate awaited between two source fetches.
#[async_trait::async_trait]
pub trait RequestPacer: Send + Sync {
    async fn pause(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_DELAY)
    }
}

#[async_trait::async_trait]
impl RequestPacer for FixedDelay {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
