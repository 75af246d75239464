//! `stats` and `dashboard`: the live-stats panel and the analytics overlay.

use std::sync::Arc;
use std::time::Duration;

use folio_client::{AnalyticsDashboard, DashboardState, LiveStatsPoller, PortfolioClient};
use folio_core::display::{OverlayState, Shortcut};
use folio_core::TimeRange;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use crate::{print_lines, render, DashboardView};

/// What a line typed at the `stats --watch` prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WatchInput {
    Overlay(Shortcut),
    Range(TimeRange),
}

/// Line-based stand-ins for the keyboard shortcuts: `a` is Ctrl+A, `q` or
/// `esc` is Escape.
pub(crate) fn parse_watch_input(line: &str) -> Option<WatchInput> {
    let input = line.trim();
    if let Ok(range) = input.parse::<TimeRange>() {
        return Some(WatchInput::Range(range));
    }
    let shortcut = match input.to_ascii_lowercase().as_str() {
        "a" => Shortcut::from_key(true, "a"),
        "q" | "esc" => Shortcut::from_key(false, "Esc"),
        _ => None,
    }?;
    Some(WatchInput::Overlay(shortcut))
}

fn dashboard_lines(state: &DashboardState, view: DashboardView) -> Vec<String> {
    if state.loading {
        return vec![format!("analytics: loading {}...", state.range.label())];
    }
    let Some(snapshot) = &state.snapshot else {
        return vec!["analytics: no data".to_string()];
    };
    match view {
        DashboardView::Overview => render::overview(state),
        DashboardView::Projects => render::project_analytics(snapshot),
        DashboardView::Insights => render::insights(snapshot),
    }
}

/// Fetches live stats once and prints them.
pub(crate) async fn run_stats_once(client: Arc<PortfolioClient>) {
    // The first fetch fires immediately; the interval never elapses here.
    let poller = LiveStatsPoller::spawn(client, LiveStatsPoller::DEFAULT_INTERVAL);
    let mut rx = poller.subscribe();
    let state = match rx.wait_for(|state| !state.loading).await {
        Ok(state) => state.clone(),
        Err(_) => poller.current(),
    };
    print_lines(&render::live_stats(&state));
}

/// Polls live stats until stdin closes or Ctrl-C, with the analytics overlay
/// toggled from stdin.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub(crate) async fn run_watch(
    client: Arc<PortfolioClient>,
    interval: Duration,
    default_range: TimeRange,
) -> anyhow::Result<()> {
    let poller = LiveStatsPoller::spawn(Arc::clone(&client), interval);
    let mut stats_rx = poller.subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let mut overlay = OverlayState::default();
    let mut range = default_range;
    let mut dashboard: Option<AnalyticsDashboard> = None;
    let mut dashboard_rx: Option<watch::Receiver<DashboardState>> = None;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!(
        "polling every {}s; `a` toggles analytics, `q` closes it, 7d/30d/90d/1y switch range",
        interval.as_secs()
    );

    loop {
        tokio::select! {
            changed = stats_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = stats_rx.borrow_and_update().clone();
                print_lines(&render::live_stats(&state));
            }
            Some(state) = next_dashboard_state(dashboard_rx.as_mut()) => {
                print_lines(&dashboard_lines(&state, DashboardView::Overview));
            }
            line = input.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_watch_input(&line) {
                    Some(WatchInput::Range(selected)) => {
                        range = selected;
                        if let Some(dashboard) = dashboard.as_mut() {
                            dashboard.select_range(selected);
                        }
                    }
                    Some(WatchInput::Overlay(shortcut)) => {
                        let was_open = overlay.open;
                        let open = overlay.apply(shortcut);
                        if open && !was_open {
                            let opened = AnalyticsDashboard::open(Arc::clone(&client), range);
                            let mut rx = opened.subscribe();
                            rx.mark_changed();
                            dashboard_rx = Some(rx);
                            dashboard = Some(opened);
                        } else if !open && was_open {
                            // Dropping the dashboard aborts its fetch.
                            dashboard_rx = None;
                            dashboard = None;
                            println!("analytics closed");
                        }
                    }
                    None => println!("unrecognised input: {}", line.trim()),
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    tracing::debug!(ticks = poller.current().ticks, "leaving watch mode");
    Ok(())
}

async fn next_dashboard_state(
    rx: Option<&mut watch::Receiver<DashboardState>>,
) -> Option<DashboardState> {
    match rx {
        Some(rx) => {
            rx.changed().await.ok()?;
            Some(rx.borrow_and_update().clone())
        }
        None => std::future::pending().await,
    }
}

/// Loads the dashboard for `range` (falling back to sample data) and prints
/// one view of it.
pub(crate) async fn run_dashboard(
    client: Arc<PortfolioClient>,
    range: TimeRange,
    view: DashboardView,
) {
    let dashboard = AnalyticsDashboard::open(client, range);
    let state = dashboard.ready().await;
    print_lines(&dashboard_lines(&state, view));
}
