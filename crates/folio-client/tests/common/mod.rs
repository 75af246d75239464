#![allow(dead_code)]

use std::sync::Arc;

use folio_client::PortfolioClient;
use wiremock::MockServer;

pub fn test_client(base_url: &str) -> Arc<PortfolioClient> {
    Arc::new(
        PortfolioClient::with_base_url(base_url, 5, "folio-test")
            .expect("client construction should not fail"),
    )
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}

pub fn project_json(id: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "A project",
        "technologies": ["Rust"],
        "category": category,
        "status": "completed",
        "metrics": { "views": 10, "likes": 1, "performance_score": 90 }
    })
}

pub fn skill_json(id: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Skill {id}"),
        "category": category,
        "level": 75,
        "experience_years": 2,
        "projects_count": 4,
        "learning_progress": 60
    })
}

pub fn portfolio_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "title": "Analyst",
        "description": "First programmer",
        "email": "ada@example.com",
        "social": { "github": "https://github.com/ada" },
        "bio": "Notes on the Analytical Engine",
        "experience": 5
    })
}
