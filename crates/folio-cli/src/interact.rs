//! Per-project interaction commands. Each one mounts a tracker for the
//! project, performs a single action and prints the resulting counters.

use std::sync::Arc;

use folio_client::{InteractionOutcome, InteractionTracker, PortfolioClient};
use folio_core::display::share_link;

use crate::{print_lines, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toggle {
    Like,
    Favorite,
}

fn describe(outcome: InteractionOutcome) -> &'static str {
    match outcome {
        InteractionOutcome::Applied => "ok",
        InteractionOutcome::Skipped => "already recorded",
        InteractionOutcome::Busy => "another toggle is in flight",
        InteractionOutcome::Failed => "request failed; counters unchanged",
        InteractionOutcome::Discarded => "discarded",
    }
}

fn print_counters(tracker: &InteractionTracker) {
    print_lines(&render::counters(tracker.project_id(), &tracker.counters()));
}

pub(crate) async fn run_view(client: Arc<PortfolioClient>, project_id: &str, session_id: &str) {
    let tracker = InteractionTracker::new(client, project_id, session_id);
    let outcome = tracker.record_view().await;
    tracker.fetch_snapshot().await;
    println!("view: {}", describe(outcome));
    print_counters(&tracker);
}

pub(crate) async fn run_toggle(
    client: Arc<PortfolioClient>,
    project_id: &str,
    session_id: &str,
    toggle: Toggle,
) {
    let tracker = InteractionTracker::new(client, project_id, session_id);
    tracker.fetch_snapshot().await;
    let (label, outcome) = match toggle {
        Toggle::Like => ("like", tracker.toggle_like().await),
        Toggle::Favorite => ("favorite", tracker.toggle_favorite().await),
    };
    println!("{label}: {}", describe(outcome));
    print_counters(&tracker);
}

pub(crate) async fn run_share(
    client: Arc<PortfolioClient>,
    project_id: &str,
    session_id: &str,
    platform: &str,
    url: &str,
    title: &str,
) {
    let tracker = InteractionTracker::new(client, project_id, session_id);
    tracker.fetch_snapshot().await;
    let outcome = tracker.share(platform).await;
    println!("share ({platform}): {}", describe(outcome));
    // The link is still useful when recording the share failed.
    match share_link(platform, title, url) {
        Some(link) => println!("{link}"),
        None => println!("no share link for platform '{platform}'"),
    }
    print_counters(&tracker);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outcome_has_a_description() {
        for outcome in [
            InteractionOutcome::Applied,
            InteractionOutcome::Skipped,
            InteractionOutcome::Busy,
            InteractionOutcome::Failed,
            InteractionOutcome::Discarded,
        ] {
            assert!(!describe(outcome).is_empty());
        }
    }
}
