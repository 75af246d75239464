//! Analytics dashboard data.
//!
//! [`fetch_dashboard`] never fails: when the endpoint is unreachable or
//! answers with garbage it substitutes the fixed fallback snapshot, so the
//! dashboard always has something to render once loading finishes.
//!
//! [`AnalyticsDashboard`] tracks the selected [`TimeRange`]. Changing the
//! range aborts the in-flight fetch, and every fetch is tagged with a
//! generation so a response for a superseded range is discarded rather than
//! overwriting the newer selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use folio_core::{fallback, AnalyticsSnapshot, TimeRange};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::PortfolioClient;

/// Fetches the dashboard snapshot for `range`, or the fallback snapshot on
/// any failure.
pub async fn fetch_dashboard(client: &PortfolioClient, range: TimeRange) -> AnalyticsSnapshot {
    match client.get_dashboard(range).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(
                range = %range,
                error = %e,
                "analytics unavailable; using fallback snapshot"
            );
            fallback::analytics_snapshot()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub range: TimeRange,
    pub loading: bool,
    /// Replaced wholesale by each completed fetch for the current range.
    pub snapshot: Option<AnalyticsSnapshot>,
}

/// Owns the selected range and the fetch for it.
#[derive(Debug)]
pub struct AnalyticsDashboard {
    client: Arc<PortfolioClient>,
    state: Arc<watch::Sender<DashboardState>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl AnalyticsDashboard {
    /// Opens the dashboard and starts fetching `range`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn open(client: Arc<PortfolioClient>, range: TimeRange) -> Self {
        let (tx, _rx) = watch::channel(DashboardState {
            range,
            loading: true,
            snapshot: None,
        });
        let mut dashboard = Self {
            client,
            state: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        };
        dashboard.start_fetch(range, 0);
        dashboard
    }

    #[must_use]
    pub fn range(&self) -> TimeRange {
        self.state.borrow().range
    }

    #[must_use]
    pub fn current(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Switches to `range` and refetches. Selecting the current range is a
    /// no-op.
    pub fn select_range(&mut self, range: TimeRange) {
        if range == self.range() {
            return;
        }
        // Bump the generation before publishing the new range so a fetch
        // for the old range that lands in between is already stale.
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_modify(|state| {
            state.range = range;
            state.loading = true;
        });
        self.start_fetch(range, generation);
    }

    /// Waits until the fetch for the currently selected range has landed.
    pub async fn ready(&self) -> DashboardState {
        let mut rx = self.state.subscribe();
        let state = match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.current(),
        };
        state
    }

    fn start_fetch(&mut self, range: TimeRange, generation: u64) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let current_generation = Arc::clone(&self.generation);

        self.in_flight = Some(tokio::spawn(async move {
            let snapshot = fetch_dashboard(&client, range).await;
            let applied = state.send_if_modified(|current| {
                let latest = current_generation.load(Ordering::Acquire);
                apply_fetched(current, range, generation, latest, snapshot)
            });
            if !applied {
                tracing::debug!(range = %range, "discarding analytics for superseded range");
            }
        }));
    }
}

/// Stores `snapshot` only when it belongs to the newest fetch and to the
/// range currently selected.
fn apply_fetched(
    current: &mut DashboardState,
    range: TimeRange,
    generation: u64,
    latest: u64,
    snapshot: AnalyticsSnapshot,
) -> bool {
    if generation != latest || current.range != range {
        return false;
    }
    current.snapshot = Some(snapshot);
    current.loading = false;
    true
}

impl Drop for AnalyticsDashboard {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(range: TimeRange) -> DashboardState {
        DashboardState {
            range,
            loading: true,
            snapshot: None,
        }
    }

    #[test]
    fn apply_fetched_stores_current_range() {
        let mut state = loading(TimeRange::ThirtyDays);
        let applied = apply_fetched(
            &mut state,
            TimeRange::ThirtyDays,
            2,
            2,
            fallback::analytics_snapshot(),
        );
        assert!(applied);
        assert!(!state.loading);
        assert_eq!(state.snapshot, Some(fallback::analytics_snapshot()));
    }

    #[test]
    fn apply_fetched_rejects_older_generation() {
        let mut state = loading(TimeRange::ThirtyDays);
        let applied = apply_fetched(
            &mut state,
            TimeRange::ThirtyDays,
            1,
            2,
            fallback::analytics_snapshot(),
        );
        assert!(!applied);
        assert_eq!(state, loading(TimeRange::ThirtyDays));
    }

    #[test]
    fn apply_fetched_rejects_other_range_even_with_matching_generation() {
        // Range already switched to 30d while the 7d fetch still carries the
        // latest generation number.
        let mut state = loading(TimeRange::ThirtyDays);
        let applied = apply_fetched(
            &mut state,
            TimeRange::SevenDays,
            0,
            0,
            fallback::analytics_snapshot(),
        );
        assert!(!applied);
        assert!(state.loading);
        assert!(state.snapshot.is_none());
    }

    #[tokio::test]
    async fn select_range_bumps_generation_before_publishing() {
        let client = Arc::new(
            PortfolioClient::with_base_url("http://127.0.0.1:9", 1, "folio-test").expect("client"),
        );
        let mut dashboard = AnalyticsDashboard::open(client, TimeRange::SevenDays);
        let mut rx = dashboard.subscribe();
        dashboard.select_range(TimeRange::NinetyDays);
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.range, TimeRange::NinetyDays);
        assert_eq!(dashboard.generation.load(Ordering::Acquire), 1);
    }
}
