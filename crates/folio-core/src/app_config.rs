use std::path::PathBuf;

use crate::analytics::TimeRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Root of the portfolio API, without a trailing `/api`.
    pub api_base_url: String,
    pub log_level: String,
    /// File holding the persisted session identifier.
    pub session_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub live_stats_interval_secs: u64,
    pub analytics_range: TimeRange,
}
