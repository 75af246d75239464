pub mod analytics;
pub mod app_config;
pub mod config;
pub mod display;
pub mod fallback;
pub mod interactions;
pub mod portfolio;

pub use analytics::{
    AnalyticsOverview, AnalyticsSnapshot, DailyTrend, Insight, LiveStats, MonthlyTrend,
    ProjectAnalytics, RecentActivity, TimeRange, TopProject, Trends, WeeklyTrend,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use interactions::{
    FavoriteResponse, InteractionCounters, InteractionRequest, LikeResponse, ShareRequest,
    UserInteractions, ViewResponse,
};
pub use portfolio::{
    derive_categories, Portfolio, PortfolioData, Project, ProjectCollection, ProjectMetrics,
    ProjectPerformance, Skill, SkillCollection, SocialLinks,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
