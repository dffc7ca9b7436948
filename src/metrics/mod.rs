use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

#[cfg(test)]
mod tests;

/// Width of the rolling window behind [`RequestMetrics::requests_per_minute`].
const RATE_WINDOW: TimeDelta = TimeDelta::seconds(60);

/// Counters and start timestamps for every call dispatched through one
/// client.
///
/// All state sits behind a single lock, so reads never observe a torn
/// intermediate and concurrent dispatches never race on the counters.
/// Counts only ever grow; the timestamp history is pruned in place to the
/// trailing window whenever the rate is queried.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    state: RwLock<MetricsState>,
}

#[derive(Debug, Default)]
struct MetricsState {
    total: u64,
    successful: u64,
    failed: u64,
    started: Vec<DateTime<Utc>>,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self { state: RwLock::new(MetricsState::default()) }
    }

    /// Called once per dispatch, before the request goes out.
    pub(crate) async fn record_started(&self) {
        let mut state = self.state.write().await;
        state.total += 1;
        state.started.push(Utc::now());
    }

    /// Called once per completion, whichever way the call ended.
    pub(crate) async fn record_outcome(&self, success: bool) {
        let mut state = self.state.write().await;
        if success {
            state.successful += 1;
        } else {
            state.failed += 1;
        }
    }

    pub async fn total_count(&self) -> u64 { self.state.read().await.total }

    pub async fn successful_count(&self) -> u64 { self.state.read().await.successful }

    pub async fn failed_count(&self) -> u64 { self.state.read().await.failed }

    /// Number of dispatches started strictly within the last 60 seconds.
    ///
    /// The value is the raw window count, not normalized any further; the
    /// window width is what makes it a per-minute figure. Timestamps that
    /// fell out of the window are dropped here to keep the history bounded.
    #[allow(clippy::cast_precision_loss)]
    pub async fn requests_per_minute(&self) -> f64 {
        let cutoff = Utc::now() - RATE_WINDOW;
        let mut state = self.state.write().await;
        state.started.retain(|started| *started > cutoff);
        state.started.len() as f64
    }

    /// Percentage of completed calls that succeeded, `0.0` before the first
    /// dispatch.
    #[allow(clippy::cast_precision_loss)]
    pub async fn success_rate(&self) -> f64 {
        let state = self.state.read().await;
        if state.total == 0 {
            return 0.0;
        }
        100.0 * state.successful as f64 / state.total as f64
    }

    /// Test hook: registers a start at an arbitrary point in time.
    #[cfg(test)]
    pub(crate) async fn record_started_at(&self, started: DateTime<Utc>) {
        let mut state = self.state.write().await;
        state.total += 1;
        state.started.push(started);
    }
}
