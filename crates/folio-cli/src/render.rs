//! Plain-text rendering of the portfolio sections.
//!
//! Every function here is pure: it takes domain values and returns the lines
//! to print, so the layouts are unit-tested without a terminal.

use chrono::DateTime;
use folio_client::{DashboardState, LiveStatsState};
use folio_core::display::{daily_bars, EngagementTier, SkillTier, SkillsSummary};
use folio_core::{AnalyticsSnapshot, InteractionCounters, Portfolio, Project, Skill};

const TITLE_WIDTH: usize = 32;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

/// `2025-01-26T14:03:00Z` renders as `14:03`; anything unparsable is shown as sent.
fn fmt_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_string(),
        |t| t.format("%H:%M").to_string(),
    )
}

fn fmt_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn skill_tier_label(tier: SkillTier) -> &'static str {
    match tier {
        SkillTier::Expert => "expert",
        SkillTier::Advanced => "advanced",
        SkillTier::Intermediate => "intermediate",
        SkillTier::Beginner => "beginner",
    }
}

fn engagement_label(tier: EngagementTier) -> &'static str {
    match tier {
        EngagementTier::High => "high",
        EngagementTier::Medium => "medium",
        EngagementTier::Low => "low",
    }
}

pub(crate) fn profile(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", portfolio.name, portfolio.title),
        portfolio.description.clone(),
    ];
    for (label, value) in [
        ("email", &portfolio.email),
        ("location", &portfolio.location),
        ("website", &portfolio.website),
        ("github", &portfolio.social.github),
        ("linkedin", &portfolio.social.linkedin),
    ] {
        if !value.is_empty() {
            lines.push(format!("  {label:<10}{value}"));
        }
    }
    lines
}

pub(crate) fn projects(projects: &[&Project], filters: &[String], selected: &str) -> Vec<String> {
    let mut lines = vec![format!("filters: {}  (showing: {selected})", filters.join(" | "))];
    if projects.is_empty() {
        lines.push("no projects in this category".to_string());
        return lines;
    }

    lines.push(format!(
        "{:<6}{:<TITLE_WIDTH$}{:<12}{:<12}{:>8}{:>7}",
        "ID", "TITLE", "CATEGORY", "STATUS", "VIEWS", "LIKES"
    ));
    for project in projects {
        lines.push(format!(
            "{:<6}{:<TITLE_WIDTH$}{:<12}{:<12}{:>8}{:>7}",
            project.id,
            truncate(&project.title, TITLE_WIDTH - 1),
            project.category,
            project.status,
            project.metrics.views,
            project.metrics.likes
        ));
    }
    lines
}

pub(crate) fn skills(skills: &[&Skill], summary: SkillsSummary, filters: &[String]) -> Vec<String> {
    let mut lines = vec![format!("filters: {}", filters.join(" | "))];
    lines.push(format!(
        "{:<20}{:<12}{:>6}  {:<14}{:>6}",
        "SKILL", "CATEGORY", "LEVEL", "TIER", "YEARS"
    ));
    for skill in skills {
        lines.push(format!(
            "{:<20}{:<12}{:>6}  {:<14}{:>6}",
            truncate(&skill.name, 19),
            skill.category,
            skill.level,
            skill_tier_label(SkillTier::from_level(skill.level)),
            skill.experience_years
        ));
    }
    lines.push(format!(
        "{} technologies, {} years average experience, {} projects",
        summary.technologies, summary.avg_experience_years, summary.total_projects
    ));
    lines
}

pub(crate) fn live_stats(state: &LiveStatsState) -> Vec<String> {
    if state.loading {
        return vec!["live stats: loading...".to_string()];
    }
    let Some(stats) = &state.stats else {
        return vec!["live stats: unavailable".to_string()];
    };

    let mut lines = vec![format!(
        "views {}  likes {}  projects {}  active users {}",
        fmt_number(stats.total_views),
        fmt_number(stats.total_likes),
        stats.total_projects,
        stats.active_users
    )];
    if let Some(top) = &stats.top_project {
        lines.push(format!("top project: {} ({} views)", top.title, fmt_number(top.views)));
    }
    for activity in stats.latest_activity() {
        lines.push(format!(
            "  {}  {:<8}{}",
            fmt_time(&activity.timestamp),
            activity.kind,
            activity.project
        ));
    }
    lines
}

pub(crate) fn counters(project_id: &str, counters: &InteractionCounters) -> Vec<String> {
    let mark = |on: bool| if on { "*" } else { " " };
    vec![
        format!("project {project_id}"),
        format!(
            "  views {}  likes {}{}  favorites {}{}  shares {}  comments {}",
            counters.views,
            counters.likes,
            mark(counters.user_interactions.liked),
            counters.favorites,
            mark(counters.user_interactions.favorited),
            counters.shares,
            counters.comments
        ),
    ]
}

pub(crate) fn overview(state: &DashboardState) -> Vec<String> {
    let mut lines = vec![format!("analytics: {}", state.range.label())];
    let Some(snapshot) = &state.snapshot else {
        lines.push("loading...".to_string());
        return lines;
    };

    let o = &snapshot.overview;
    lines.push(format!(
        "views {}  likes {}  shares {}  comments {}  engagement {:.1}%",
        fmt_number(o.total_views),
        fmt_number(o.total_likes),
        fmt_number(o.total_shares),
        fmt_number(o.total_comments),
        o.avg_engagement_rate
    ));
    lines.push(format!("top performer: {}", o.top_performing_project));
    lines.extend(daily_chart(snapshot));
    lines
}

const CHART_WIDTH: f64 = 40.0;

fn bar(pct: f64, fill: char) -> String {
    // Percentages are relative to the full chart height (views max 60, likes max 40).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = (pct / 100.0 * CHART_WIDTH).round().max(0.0) as usize;
    fill.to_string().repeat(len)
}

fn daily_chart(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    daily_bars(&snapshot.trends.daily)
        .into_iter()
        .map(|day| {
            format!(
                "  {:<12}{}{}",
                day.date,
                bar(day.views_pct, '#'),
                bar(day.likes_pct, '+')
            )
        })
        .collect()
}

pub(crate) fn project_analytics(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<TITLE_WIDTH$}{:>8}{:>7}{:>8}{:>8}  {}",
        "PROJECT", "VIEWS", "LIKES", "SHARES", "ENGAGE", "TIER"
    )];
    for p in &snapshot.projects {
        lines.push(format!(
            "{:<TITLE_WIDTH$}{:>8}{:>7}{:>8}{:>7.1}%  {}",
            truncate(&p.title, TITLE_WIDTH - 1),
            p.views,
            p.likes,
            p.shares,
            p.engagement_rate,
            engagement_label(EngagementTier::from_rate(p.engagement_rate))
        ));
    }
    lines
}

pub(crate) fn insights(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    for insight in &snapshot.insights {
        lines.push(format!("[{}/{}] {}", insight.kind, insight.impact, insight.title));
        lines.push(format!("  {}", insight.description));
        lines.push(format!("  -> {}", insight.recommendation));
    }
    if lines.is_empty() {
        lines.push("no insights for this range".to_string());
    }
    lines
}
