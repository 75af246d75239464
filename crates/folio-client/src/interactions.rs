//! Per-project interaction tracking.
//!
//! Each project card owns one [`InteractionTracker`]. Every remote call is
//! best-effort: failures are logged and absorbed, never retried, and never
//! surfaced as errors. Callers get an [`InteractionOutcome`] describing what
//! happened to local state.
//!
//! Views and shares are optimistic (applied locally once the request
//! succeeds, whatever the body says). Likes and favorites are authoritative:
//! local state takes exactly the count and flag the server returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use folio_core::InteractionCounters;

use crate::client::PortfolioClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Local state was updated from the response.
    Applied,
    /// Nothing to do (view already recorded or in flight).
    Skipped,
    /// Another toggle is still outstanding; no request was sent.
    Busy,
    /// The request failed; local state is unchanged.
    Failed,
    /// The response arrived after the card was detached and was dropped.
    Discarded,
}

/// Interaction state and remote operations for a single project.
///
/// Cheap to clone; clones share the same state, so a card can hand a handle
/// to a spawned task. Never share one tracker between different projects.
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    inner: Arc<TrackerInner>,
}

#[derive(Debug)]
struct TrackerInner {
    client: Arc<PortfolioClient>,
    project_id: String,
    session_id: String,
    counters: Mutex<InteractionCounters>,
    /// A like or favorite toggle is outstanding.
    busy: AtomicBool,
    /// A view has been claimed for this mount (in flight or recorded).
    view_claimed: AtomicBool,
    mounted: AtomicBool,
}

/// Holds an `AtomicBool` flag for the lifetime of a request, releasing it
/// even when the request future is dropped.
struct FlagGuard<'a>(&'a AtomicBool);

impl<'a> FlagGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl InteractionTracker {
    /// Creates a mounted tracker with zeroed counters.
    pub fn new(
        client: Arc<PortfolioClient>,
        project_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                client,
                project_id: project_id.into(),
                session_id: session_id.into(),
                counters: Mutex::new(InteractionCounters::default()),
                busy: AtomicBool::new(false),
                view_claimed: AtomicBool::new(false),
                mounted: AtomicBool::new(true),
            }),
        }
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.inner.project_id
    }

    /// Snapshot of the current counters.
    #[must_use]
    pub fn counters(&self) -> InteractionCounters {
        self.inner
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a like/favorite toggle is outstanding (the controls are disabled).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.inner.busy.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::Acquire)
    }

    /// Card mount: record the view, then load the full counter set.
    pub async fn mount(&self) {
        self.record_view().await;
        self.fetch_snapshot().await;
    }

    /// Card unmount. Responses that arrive afterwards are discarded.
    pub fn detach(&self) {
        self.inner.mounted.store(false, Ordering::Release);
    }

    /// Loads `/api/interactions/{id}/stats` and replaces the counters
    /// wholesale. On failure the current (initially zeroed) counters stay.
    pub async fn fetch_snapshot(&self) -> InteractionOutcome {
        match self
            .inner
            .client
            .get_interaction_stats(&self.inner.project_id)
            .await
        {
            Ok(counters) => self.apply(|current| *current = counters),
            Err(e) => {
                tracing::warn!(
                    project_id = %self.inner.project_id,
                    error = %e,
                    "fetching interaction stats failed"
                );
                InteractionOutcome::Failed
            }
        }
    }

    /// Records one view per mount. A second call while the first is in
    /// flight, or after it succeeded, sends nothing.
    pub async fn record_view(&self) -> InteractionOutcome {
        if self.counters().user_interactions.viewed {
            return InteractionOutcome::Skipped;
        }
        if self
            .inner
            .view_claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return InteractionOutcome::Skipped;
        }

        match self
            .inner
            .client
            .post_view(&self.inner.project_id, &self.inner.session_id)
            .await
        {
            Ok(response) => self.apply(|c| c.apply_view(response)),
            Err(e) => {
                // Release the claim so a later call may try again.
                self.inner.view_claimed.store(false, Ordering::Release);
                tracing::warn!(
                    project_id = %self.inner.project_id,
                    error = %e,
                    "tracking view failed"
                );
                InteractionOutcome::Failed
            }
        }
    }

    /// Toggles the like for this session. Rejected with
    /// [`InteractionOutcome::Busy`] while another toggle is outstanding.
    pub async fn toggle_like(&self) -> InteractionOutcome {
        let Some(_busy) = FlagGuard::acquire(&self.inner.busy) else {
            tracing::debug!(project_id = %self.inner.project_id, "like ignored: toggle in flight");
            return InteractionOutcome::Busy;
        };

        match self
            .inner
            .client
            .post_like(&self.inner.project_id, &self.inner.session_id)
            .await
        {
            Ok(response) => self.apply(|c| c.apply_like(response)),
            Err(e) => {
                tracing::warn!(
                    project_id = %self.inner.project_id,
                    error = %e,
                    "toggling like failed"
                );
                InteractionOutcome::Failed
            }
        }
    }

    /// Toggles the favorite for this session. Shares the busy flag with
    /// [`Self::toggle_like`].
    pub async fn toggle_favorite(&self) -> InteractionOutcome {
        let Some(_busy) = FlagGuard::acquire(&self.inner.busy) else {
            tracing::debug!(project_id = %self.inner.project_id, "favorite ignored: toggle in flight");
            return InteractionOutcome::Busy;
        };

        match self
            .inner
            .client
            .post_favorite(&self.inner.project_id, &self.inner.session_id)
            .await
        {
            Ok(response) => self.apply(|c| c.apply_favorite(response)),
            Err(e) => {
                tracing::warn!(
                    project_id = %self.inner.project_id,
                    error = %e,
                    "toggling favorite failed"
                );
                InteractionOutcome::Failed
            }
        }
    }

    /// Reports a share on `platform` (`twitter`, `linkedin`, `copy`, ...).
    /// The local share count goes up once the request succeeds.
    pub async fn share(&self, platform: &str) -> InteractionOutcome {
        match self
            .inner
            .client
            .post_share(&self.inner.project_id, &self.inner.session_id, platform)
            .await
        {
            Ok(()) => self.apply(InteractionCounters::apply_share),
            Err(e) => {
                tracing::warn!(
                    project_id = %self.inner.project_id,
                    platform,
                    error = %e,
                    "tracking share failed"
                );
                InteractionOutcome::Failed
            }
        }
    }

    fn apply(&self, update: impl FnOnce(&mut InteractionCounters)) -> InteractionOutcome {
        if !self.is_mounted() {
            tracing::debug!(
                project_id = %self.inner.project_id,
                "dropping interaction response for detached card"
            );
            return InteractionOutcome::Discarded;
        }
        let mut counters = self
            .inner
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut counters);
        InteractionOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_guard_is_exclusive_and_releases_on_drop() {
        let flag = AtomicBool::new(false);
        let guard = FlagGuard::acquire(&flag).expect("first acquire succeeds");
        assert!(FlagGuard::acquire(&flag).is_none());
        drop(guard);
        assert!(FlagGuard::acquire(&flag).is_some());
    }

    #[test]
    fn new_tracker_starts_zeroed_and_mounted() {
        let client = Arc::new(
            PortfolioClient::with_base_url("http://127.0.0.1:9", 1, "folio-test").unwrap(),
        );
        let tracker = InteractionTracker::new(client, "1", "session_1_abc");
        assert_eq!(tracker.counters(), InteractionCounters::default());
        assert!(tracker.is_mounted());
        assert!(!tracker.is_busy());
        tracker.detach();
        assert!(!tracker.is_mounted());
    }
}
