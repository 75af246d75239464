//! Startup load of profile, projects and skills.
//!
//! `/api/projects` and `/api/skills` answer either with a bare JSON array or
//! with a wrapping object. Both shapes are decoded into an explicit tagged
//! union here, at the network boundary, and normalized into
//! [`ProjectCollection`] / [`SkillCollection`] before anything else sees them.

use folio_core::{
    derive_categories, PortfolioData, Project, ProjectCollection, Skill, SkillCollection,
};
use serde::Deserialize;

use crate::client::PortfolioClient;
use crate::error::ClientError;

/// Wire shape of `/api/projects`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectsPayload {
    Bare(Vec<Project>),
    Wrapped {
        #[serde(default)]
        projects: Option<Vec<Project>>,
        #[serde(default)]
        total: Option<u64>,
    },
}

impl ProjectsPayload {
    /// Bare: the array is the item list and its length the total.
    /// Wrapped: fields pass through, missing ones become empty / zero.
    #[must_use]
    pub fn normalize(self) -> ProjectCollection {
        match self {
            ProjectsPayload::Bare(items) => ProjectCollection {
                total: items.len() as u64,
                items,
            },
            ProjectsPayload::Wrapped { projects, total } => ProjectCollection {
                items: projects.unwrap_or_default(),
                total: total.unwrap_or(0),
            },
        }
    }
}

/// Wire shape of `/api/skills`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillsPayload {
    Bare(Vec<Skill>),
    Wrapped {
        #[serde(default)]
        skills: Option<Vec<Skill>>,
        #[serde(default)]
        categories: Option<Vec<String>>,
    },
}

impl SkillsPayload {
    /// Categories the server did not supply are derived from the skills, in
    /// order of first occurrence.
    #[must_use]
    pub fn normalize(self) -> SkillCollection {
        let (items, categories) = match self {
            SkillsPayload::Bare(items) => (items, None),
            SkillsPayload::Wrapped { skills, categories } => (skills.unwrap_or_default(), categories),
        };
        let categories = categories.unwrap_or_else(|| derive_categories(&items));
        SkillCollection { items, categories }
    }
}

/// Fetches the three startup resources concurrently and joins them.
///
/// All-or-nothing: the first failure aborts the join and no partial data is
/// returned.
///
/// # Errors
///
/// Returns the first [`ClientError`] from any of the three requests.
pub async fn fetch_portfolio_data(client: &PortfolioClient) -> Result<PortfolioData, ClientError> {
    let (portfolio, projects, skills) = tokio::try_join!(
        client.get_portfolio(),
        client.get_projects(),
        client.get_skills(),
    )?;

    Ok(PortfolioData {
        portfolio,
        projects: projects.normalize(),
        skills: skills.normalize(),
    })
}

/// Best-effort startup load. `None` means "not yet available"; there is no
/// retry and no partial result.
pub async fn load_portfolio(client: &PortfolioClient) -> Option<PortfolioData> {
    match fetch_portfolio_data(client).await {
        Ok(data) => {
            tracing::info!(
                projects = data.projects.items.len(),
                skills = data.skills.items.len(),
                "portfolio data loaded"
            );
            Some(data)
        }
        Err(e) => {
            tracing::error!(error = %e, "loading portfolio data failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": format!("Project {id}"),
            "description": "",
            "technologies": [],
            "category": "web",
            "status": "completed",
            "metrics": { "views": 1, "likes": 0, "performance_score": 90 }
        })
    }

    fn skill_json(id: &str, category: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("Skill {id}"),
            "category": category,
            "level": 80,
            "experience_years": 1,
            "projects_count": 2,
            "learning_progress": 60
        })
    }

    #[test]
    fn bare_project_array_uses_length_as_total() {
        let json = serde_json::json!([project_json("1"), project_json("2")]);
        let payload: ProjectsPayload = serde_json::from_value(json).unwrap();
        assert!(matches!(payload, ProjectsPayload::Bare(_)));
        let collection = payload.normalize();
        assert_eq!(collection.total, 2);
        assert_eq!(collection.items.len(), 2);
    }

    #[test]
    fn wrapped_projects_pass_total_through() {
        let json = serde_json::json!({ "projects": [project_json("1")], "total": 12 });
        let collection = serde_json::from_value::<ProjectsPayload>(json)
            .unwrap()
            .normalize();
        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.total, 12);
    }

    #[test]
    fn wrapped_projects_missing_fields_default() {
        let json = serde_json::json!({ "page": 1 });
        let collection = serde_json::from_value::<ProjectsPayload>(json)
            .unwrap()
            .normalize();
        assert!(collection.items.is_empty());
        assert_eq!(collection.total, 0);
    }

    #[test]
    fn bare_skill_array_derives_categories() {
        let json = serde_json::json!([
            skill_json("1", "frontend"),
            skill_json("2", "backend"),
            skill_json("3", "frontend"),
        ]);
        let collection = serde_json::from_value::<SkillsPayload>(json)
            .unwrap()
            .normalize();
        assert_eq!(collection.items.len(), 3);
        assert_eq!(collection.categories, vec!["frontend", "backend"]);
    }

    #[test]
    fn wrapped_skills_pass_categories_through_unchanged() {
        let json = serde_json::json!({
            "skills": [skill_json("1", "frontend")],
            "categories": ["devops", "frontend", "devops"]
        });
        let collection = serde_json::from_value::<SkillsPayload>(json)
            .unwrap()
            .normalize();
        assert_eq!(collection.categories, vec!["devops", "frontend", "devops"]);
    }

    #[test]
    fn wrapped_skills_without_categories_derive_them() {
        let json = serde_json::json!({
            "skills": [skill_json("1", "backend"), skill_json("2", "database")]
        });
        let collection = serde_json::from_value::<SkillsPayload>(json)
            .unwrap()
            .normalize();
        assert_eq!(collection.categories, vec!["backend", "database"]);
    }

    #[test]
    fn scalar_payload_is_rejected() {
        assert!(serde_json::from_value::<SkillsPayload>(serde_json::json!("nope")).is_err());
    }
}
