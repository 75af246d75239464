//! Client-side aggregation for the rendered sections: category filters,
//! summary figures, display tiers, chart scaling, share links and the
//! analytics overlay shortcut.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::analytics::DailyTrend;
use crate::portfolio::{Project, Skill};

/// Filter value that selects every item.
pub const ALL_CATEGORIES: &str = "all";

/// Anything that belongs to a gallery category.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Filter buttons for a gallery: `"all"` followed by distinct categories in
/// order of first occurrence.
#[must_use]
pub fn category_filters<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !filters.iter().any(|f| f == item.category()) {
            filters.push(item.category().to_string());
        }
    }
    filters
}

#[must_use]
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == ALL_CATEGORIES || item.category() == selected)
        .collect()
}

/// Headline figures under the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsSummary {
    pub technologies: usize,
    /// Mean experience rounded to the nearest whole year.
    pub avg_experience_years: u64,
    pub total_projects: u64,
}

impl SkillsSummary {
    #[must_use]
    pub fn from_skills(skills: &[Skill]) -> Self {
        if skills.is_empty() {
            return Self {
                technologies: 0,
                avg_experience_years: 0,
                total_projects: 0,
            };
        }

        let total_years: f64 = skills.iter().map(|s| s.experience_years).sum();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let avg_experience_years = (total_years / skills.len() as f64).round().max(0.0) as u64;

        Self {
            technologies: skills.len(),
            avg_experience_years,
            total_projects: skills.iter().map(|s| s.projects_count).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillTier {
    #[must_use]
    pub fn from_level(level: f64) -> Self {
        if level >= 85.0 {
            SkillTier::Expert
        } else if level >= 70.0 {
            SkillTier::Advanced
        } else if level >= 50.0 {
            SkillTier::Intermediate
        } else {
            SkillTier::Beginner
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

impl EngagementTier {
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 8.0 {
            EngagementTier::High
        } else if rate >= 6.0 {
            EngagementTier::Medium
        } else {
            EngagementTier::Low
        }
    }
}

/// One day's bar heights, as percentages of the chart height.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: String,
    pub views_pct: f64,
    pub likes_pct: f64,
}

const VIEWS_BAR_SCALE: f64 = 60.0;
const LIKES_BAR_SCALE: f64 = 40.0;

/// Scales each day against the series maximum. Views fill at most 60 % of
/// the chart, likes at most 40 %. A zero maximum yields flat bars.
#[must_use]
pub fn daily_bars(daily: &[DailyTrend]) -> Vec<DailyBar> {
    let max_views = daily.iter().map(|d| d.views).max().unwrap_or(0);
    let max_likes = daily.iter().map(|d| d.likes).max().unwrap_or(0);

    #[allow(clippy::cast_precision_loss)]
    let scale = |value: u64, max: u64, pct: f64| {
        if max == 0 {
            0.0
        } else {
            value as f64 / max as f64 * pct
        }
    };

    daily
        .iter()
        .map(|d| DailyBar {
            date: d.date.clone(),
            views_pct: scale(d.views, max_views, VIEWS_BAR_SCALE),
            likes_pct: scale(d.likes, max_likes, LIKES_BAR_SCALE),
        })
        .collect()
}

// encodeURIComponent leaves A-Z a-z 0-9 - _ . ! ~ * ' ( ) unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Where a share should land once the share event has been recorded.
///
/// Returns the link to open (or copy). Unknown platforms still record a share
/// but have no destination, so they yield `None`.
#[must_use]
pub fn share_link(platform: &str, project_title: &str, url: &str) -> Option<String> {
    match platform {
        "twitter" => {
            let text = format!("Check out this amazing project: {project_title}");
            Some(format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode_component(&text),
                encode_component(url)
            ))
        }
        "linkedin" => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode_component(url)
        )),
        "copy" => Some(url.to_string()),
        _ => None,
    }
}

/// Keyboard actions that affect the analytics overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleAnalytics,
    CloseAnalytics,
}

impl Shortcut {
    /// Ctrl+A toggles the overlay; Esc closes it.
    #[must_use]
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        match (ctrl, key) {
            (true, "a" | "A") => Some(Shortcut::ToggleAnalytics),
            (_, "Escape" | "Esc") => Some(Shortcut::CloseAnalytics),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub open: bool,
}

impl OverlayState {
    /// Applies a shortcut and returns whether the overlay is now open.
    pub fn apply(&mut self, shortcut: Shortcut) -> bool {
        self.open = match shortcut {
            Shortcut::ToggleAnalytics => !self.open,
            Shortcut::CloseAnalytics => false,
        };
        self.open
    }
}
