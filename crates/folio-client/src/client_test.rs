use super::*;

fn test_client(base_url: &str) -> PortfolioClient {
    PortfolioClient::with_base_url(base_url, 30, "folio-test")
        .expect("client construction should not fail")
}

#[test]
fn endpoint_joins_segments_under_root() {
    let client = test_client("https://api.example.com");
    let url = client.endpoint(&["api", "portfolio"]);
    assert_eq!(url.as_str(), "https://api.example.com/api/portfolio");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("https://example.com/backend/");
    let url = client.endpoint(&["api", "skills"]);
    assert_eq!(url.as_str(), "https://example.com/backend/api/skills");
}

#[test]
fn endpoint_encodes_project_id_segment() {
    let client = test_client("https://api.example.com");
    let url = client.endpoint(&["api", "interactions", "a b/c", "stats"]);
    assert_eq!(
        url.as_str(),
        "https://api.example.com/api/interactions/a%20b%2Fc/stats"
    );
}

#[test]
fn with_base_url_rejects_relative_url() {
    let result = PortfolioClient::with_base_url("not a url", 30, "folio-test");
    assert!(
        matches!(result, Err(ClientError::InvalidBaseUrl(_))),
        "expected InvalidBaseUrl, got: {result:?}"
    );
}

#[test]
fn with_base_url_rejects_non_http_scheme() {
    let result = PortfolioClient::with_base_url("ftp://example.com", 30, "folio-test");
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
}
