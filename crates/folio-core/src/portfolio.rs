//! Profile, project and skill types served by `/api/portfolio`,
//! `/api/projects` and `/api/skills`.
//!
//! The API mixes naming styles: profile and skill fields are mostly
//! `snake_case` (`experience_years`, `github_url`), while a handful of
//! project fields are `camelCase` (`longDescription`, `startDate`). Each
//! camelCase field carries an explicit `rename`. Optional lists default to
//! empty so sparse profiles still decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub bio: String,
    /// Years of professional experience.
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        rename = "longDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default)]
    pub metrics: ProjectMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<ProjectPerformance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(default)]
    pub performance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPerformance {
    #[serde(rename = "loadTime")]
    pub load_time: f64,
    pub uptime: f64,
    #[serde(rename = "responseTime")]
    pub response_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Proficiency, 0-100.
    #[serde(default)]
    pub level: f64,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub projects_count: u64,
    #[serde(default)]
    pub learning_progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(rename = "lastUsed", default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

/// Normalized project list: `items` plus the total reported by the server
/// (or the item count when the server sent a bare array).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub items: Vec<Project>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCollection {
    pub items: Vec<Skill>,
    pub categories: Vec<String>,
}

/// Everything the page needs at startup. Assembled once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub portfolio: Portfolio,
    pub projects: ProjectCollection,
    pub skills: SkillCollection,
}

/// Distinct skill categories in order of first occurrence.
#[must_use]
pub fn derive_categories(skills: &[Skill]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for skill in skills {
        if !categories.iter().any(|c| c == &skill.category) {
            categories.push(skill.category.clone());
        }
    }
    categories
}
