//! Recurring live-stats fetch.
//!
//! The poller is an owned background task: it fetches once immediately and
//! then on a fixed interval (no jitter, no backoff) until its handle is
//! stopped or dropped. A failed tick keeps the previous snapshot.

use std::sync::Arc;
use std::time::Duration;

use folio_core::LiveStats;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::PortfolioClient;

/// What the live-stats panel renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStatsState {
    /// `true` until the first fetch completes, successful or not.
    pub loading: bool,
    /// Latest successful snapshot; stale values are kept across failures.
    pub stats: Option<LiveStats>,
    /// Completed fetch attempts, successful or not.
    pub ticks: u64,
}

impl Default for LiveStatsState {
    fn default() -> Self {
        Self {
            loading: true,
            stats: None,
            ticks: 0,
        }
    }
}

/// Handle to a running poller. Dropping it cancels the timer.
#[derive(Debug)]
pub struct LiveStatsPoller {
    task: JoinHandle<()>,
    state: watch::Receiver<LiveStatsState>,
}

impl LiveStatsPoller {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    /// Starts polling on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(client: Arc<PortfolioClient>, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(LiveStatsState::default());
        let period = interval.max(Duration::from_millis(1));
        let task = tokio::spawn(poll_loop(client, period, tx));
        Self { task, state: rx }
    }

    /// Receiver that wakes on every completed tick.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LiveStatsState> {
        self.state.clone()
    }

    #[must_use]
    pub fn current(&self) -> LiveStatsState {
        self.state.borrow().clone()
    }

    /// Cancels the timer. Equivalent to dropping the handle.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for LiveStatsPoller {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("live-stats poller stopped");
    }
}

async fn poll_loop(
    client: Arc<PortfolioClient>,
    period: Duration,
    tx: watch::Sender<LiveStatsState>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // The first tick completes immediately.
        ticker.tick().await;

        let result = client.get_live_stats().await;
        tx.send_modify(|state| {
            state.loading = false;
            state.ticks += 1;
            match result {
                Ok(stats) => state.stats = Some(stats),
                Err(e) => {
                    tracing::warn!(error = %e, "fetching live stats failed; keeping last snapshot");
                }
            }
        });
    }
}
