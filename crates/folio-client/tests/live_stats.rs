//! Integration tests for `LiveStatsPoller` using wiremock HTTP mocks.

mod common;

use std::time::Duration;

use common::{request_count, test_client};
use folio_client::LiveStatsPoller;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stats_json(total_views: u64) -> serde_json::Value {
    serde_json::json!({
        "totalViews": total_views,
        "totalLikes": 12,
        "totalProjects": 3,
        "activeUsers": 4,
        "topProject": { "title": "E-Commerce Platform", "views": 900 },
        "recentActivity": [
            { "type": "like", "project": "AI Chat Application", "timestamp": "2025-01-26T14:03:00Z" }
        ]
    })
}

#[tokio::test]
async fn first_fetch_happens_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/live-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json(1500)))
        .mount(&server)
        .await;

    // Long interval: only the immediate fetch can land within the timeout.
    let poller = LiveStatsPoller::spawn(test_client(&server.uri()), Duration::from_secs(3600));
    let mut rx = poller.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| !s.loading))
        .await
        .expect("first tick should complete")
        .expect("poller should be alive")
        .clone();

    let stats = state.stats.expect("stats should be present");
    assert_eq!(stats.total_views, 1500);
    assert_eq!(stats.top_project.unwrap().views, 900);
}

#[tokio::test]
async fn failed_tick_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/live-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json(777)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/live-stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let poller = LiveStatsPoller::spawn(test_client(&server.uri()), Duration::from_millis(50));
    let mut rx = poller.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| s.ticks >= 3))
        .await
        .expect("three ticks should complete")
        .expect("poller should be alive")
        .clone();

    assert!(!state.loading);
    assert_eq!(state.stats.map(|s| s.total_views), Some(777));
}

#[tokio::test]
async fn failed_first_tick_finishes_loading_without_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/live-stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let poller = LiveStatsPoller::spawn(test_client(&server.uri()), Duration::from_secs(3600));
    let mut rx = poller.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| !s.loading))
        .await
        .expect("first tick should complete")
        .expect("poller should be alive")
        .clone();

    assert!(state.stats.is_none());
    assert_eq!(state.ticks, 1);
}

#[tokio::test]
async fn dropping_poller_stops_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/live-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json(1)))
        .mount(&server)
        .await;

    let poller = LiveStatsPoller::spawn(test_client(&server.uri()), Duration::from_millis(100));
    let mut rx = poller.subscribe();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| s.ticks >= 2))
        .await
        .expect("two ticks should complete")
        .expect("poller should be alive");

    poller.stop();
    // Let any request that was already on the wire reach the server.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_stop = request_count(&server).await;

    tokio::time::sleep(Duration::from_millis(450)).await;
    assert_eq!(request_count(&server).await, after_stop);
}
