//! Integration tests for the startup loader using wiremock HTTP mocks.

mod common;

use std::time::{Duration, Instant};

use common::{portfolio_json, project_json, skill_json, test_client};
use folio_client::{fetch_portfolio_data, load_portfolio, ClientError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_normalizes_bare_arrays() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/portfolio", portfolio_json()).await;
    mount_json(
        &server,
        "/api/projects",
        serde_json::json!([project_json("1", "web"), project_json("2", "ai")]),
    )
    .await;
    mount_json(
        &server,
        "/api/skills",
        serde_json::json!([
            skill_json("1", "frontend"),
            skill_json("2", "backend"),
            skill_json("3", "frontend")
        ]),
    )
    .await;

    let client = test_client(&server.uri());
    let data = load_portfolio(&client).await.expect("data should load");

    assert_eq!(data.portfolio.name, "Ada Lovelace");
    assert_eq!(data.projects.total, 2);
    assert_eq!(data.projects.items.len(), 2);
    assert_eq!(data.skills.items.len(), 3);
    assert_eq!(data.skills.categories, vec!["frontend", "backend"]);
}

#[tokio::test]
async fn load_passes_wrapped_objects_through() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/portfolio", portfolio_json()).await;
    mount_json(
        &server,
        "/api/projects",
        serde_json::json!({ "projects": [project_json("1", "web")], "total": 40 }),
    )
    .await;
    mount_json(
        &server,
        "/api/skills",
        serde_json::json!({
            "skills": [skill_json("1", "frontend")],
            "categories": ["frontend", "design"]
        }),
    )
    .await;

    let client = test_client(&server.uri());
    let data = load_portfolio(&client).await.expect("data should load");

    assert_eq!(data.projects.total, 40);
    assert_eq!(data.projects.items.len(), 1);
    assert_eq!(data.skills.categories, vec!["frontend", "design"]);
}

#[tokio::test]
async fn any_failed_request_yields_no_data() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/portfolio", portfolio_json()).await;
    mount_json(&server, "/api/projects", serde_json::json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(load_portfolio(&client).await.is_none());

    let err = fetch_portfolio_data(&client).await.unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 502, .. }),
        "expected UnexpectedStatus(502), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_profile_yields_no_data() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/portfolio", serde_json::json!({ "unexpected": true })).await;
    mount_json(&server, "/api/projects", serde_json::json!([])).await;
    mount_json(&server, "/api/skills", serde_json::json!([])).await;

    let client = test_client(&server.uri());
    let err = fetch_portfolio_data(&client).await.unwrap_err();
    assert!(matches!(err, ClientError::Deserialize { .. }));
}

#[tokio::test]
async fn startup_requests_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(400);

    for (route, body) in [
        ("/api/portfolio", portfolio_json()),
        ("/api/projects", serde_json::json!([])),
        ("/api/skills", serde_json::json!([])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let started = Instant::now();
    let data = load_portfolio(&client).await.expect("data should load");
    let elapsed = started.elapsed();

    assert!(data.projects.items.is_empty());
    assert!(
        elapsed < Duration::from_millis(1000),
        "three 400ms requests should overlap, took {elapsed:?}"
    );
}
