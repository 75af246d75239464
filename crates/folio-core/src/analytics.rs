//! Live-stats and analytics-dashboard payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Time window for the analytics dashboard (`?range=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
            TimeRange::OneYear => "1y",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "Last 7 days",
            TimeRange::ThirtyDays => "Last 30 days",
            TimeRange::NinetyDays => "Last 3 months",
            TimeRange::OneYear => "Last year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown time range '{s}' (expected 7d, 30d, 90d or 1y)"))
    }
}

// ---------------------------------------------------------------------------
// /api/analytics/live-stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStats {
    #[serde(rename = "totalViews", default)]
    pub total_views: u64,
    #[serde(rename = "totalLikes", default)]
    pub total_likes: u64,
    #[serde(rename = "totalProjects", default)]
    pub total_projects: u64,
    #[serde(rename = "activeUsers", default)]
    pub active_users: u64,
    #[serde(rename = "topProject", default, skip_serializing_if = "Option::is_none")]
    pub top_project: Option<TopProject>,
    #[serde(rename = "recentActivity", default)]
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProject {
    pub title: String,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub project: String,
    /// RFC 3339 timestamp as sent by the server.
    pub timestamp: String,
}

impl LiveStats {
    /// Number of activity rows the panel shows.
    pub const RECENT_ACTIVITY_LIMIT: usize = 5;

    #[must_use]
    pub fn latest_activity(&self) -> &[RecentActivity] {
        let end = self.recent_activity.len().min(Self::RECENT_ACTIVITY_LIMIT);
        &self.recent_activity[..end]
    }
}

// ---------------------------------------------------------------------------
// /api/analytics/dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub overview: AnalyticsOverview,
    pub trends: Trends,
    #[serde(default)]
    pub projects: Vec<ProjectAnalytics>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    #[serde(rename = "totalViews")]
    pub total_views: u64,
    #[serde(rename = "totalLikes")]
    pub total_likes: u64,
    #[serde(rename = "totalShares")]
    pub total_shares: u64,
    #[serde(rename = "totalComments")]
    pub total_comments: u64,
    #[serde(rename = "avgEngagementRate")]
    pub avg_engagement_rate: f64,
    #[serde(rename = "topPerformingProject")]
    pub top_performing_project: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(default)]
    pub daily: Vec<DailyTrend>,
    #[serde(default)]
    pub weekly: Vec<WeeklyTrend>,
    #[serde(default)]
    pub monthly: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub date: String,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub week: String,
    pub views: u64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub views: u64,
    pub projects: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAnalytics {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// `trend`, `performance` or `opportunity`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    /// `positive`, `negative` or `neutral`.
    pub impact: String,
    pub recommendation: String,
}
