//! Built-in data shown when the API has not supplied its own.
//!
//! Sections fall back to these independently: a missing profile does not
//! force default projects. [`analytics_snapshot`] is the fixed substitute the
//! dashboard renders whenever `/api/analytics/dashboard` is unreachable.

use crate::analytics::{
    AnalyticsOverview, AnalyticsSnapshot, DailyTrend, Insight, MonthlyTrend, ProjectAnalytics,
    Trends, WeeklyTrend,
};
use crate::portfolio::{Portfolio, Project, ProjectMetrics, Skill, SocialLinks};

#[must_use]
pub fn portfolio() -> Portfolio {
    Portfolio {
        name: "Leandro Adriel".to_string(),
        title: "Full Stack Developer".to_string(),
        description: "Passionate developer creating innovative solutions".to_string(),
        email: "hello@example.com".to_string(),
        phone: "+1234567890".to_string(),
        location: "Tu Ciudad".to_string(),
        website: "https://tuportafolio.com".to_string(),
        social: SocialLinks {
            github: "https://github.com/tuusuario".to_string(),
            linkedin: "https://linkedin.com/in/tuusuario".to_string(),
            twitter: "https://twitter.com/tuusuario".to_string(),
        },
        bio: "Passionate about creating innovative digital experiences that blend thoughtful \
              design with robust engineering."
            .to_string(),
        experience: 3.0,
        education: Vec::new(),
        certifications: Vec::new(),
        languages: Vec::new(),
        interests: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: &str,
    status: &str,
    live_url: Option<&str>,
    metrics: (u64, u64, f64),
) -> Project {
    let (views, likes, performance_score) = metrics;
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        long_description: None,
        technologies: technologies.iter().map(|t| (*t).to_string()).collect(),
        category: category.to_string(),
        status: status.to_string(),
        start_date: None,
        end_date: None,
        github_url: Some("https://github.com".to_string()),
        live_url: live_url.map(str::to_string),
        image_url: None,
        featured: None,
        metrics: ProjectMetrics {
            views,
            likes,
            shares: None,
            comments: None,
            performance_score,
        },
        performance: None,
    }
}

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-Commerce Platform",
            "Full-stack e-commerce solution with modern UI and robust backend",
            &["React", "Node.js", "PostgreSQL", "Stripe"],
            "web",
            "completed",
            Some("https://example.com"),
            (1250, 89, 95.0),
        ),
        project(
            "2",
            "AI Chat Application",
            "Real-time chat app with AI integration and smart responses",
            &["Next.js", "OpenAI", "WebSocket", "Redis"],
            "ai",
            "completed",
            Some("https://example.com"),
            (890, 67, 92.0),
        ),
        project(
            "3",
            "Mobile Fitness Tracker",
            "Cross-platform mobile app for fitness tracking and analytics",
            &["React Native", "Firebase", "Chart.js"],
            "mobile",
            "in-progress",
            None,
            (456, 34, 88.0),
        ),
    ]
}

#[must_use]
pub fn skills() -> Vec<Skill> {
    let skill = |id: &str,
                 name: &str,
                 category: &str,
                 level: f64,
                 years: f64,
                 projects: u64,
                 progress: f64| Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        level,
        experience_years: years,
        projects_count: projects,
        learning_progress: progress,
        certifications: None,
        last_used: None,
        trending: None,
    };

    vec![
        skill("1", "React", "frontend", 90.0, 3.0, 15, 85.0),
        skill("2", "Node.js", "backend", 85.0, 2.5, 12, 80.0),
        skill("3", "TypeScript", "language", 88.0, 2.0, 18, 90.0),
        skill("4", "PostgreSQL", "database", 75.0, 2.0, 8, 70.0),
        skill("5", "Docker", "devops", 70.0, 1.5, 6, 75.0),
        skill("6", "Python", "language", 80.0, 3.0, 10, 85.0),
    ]
}

/// Fixed dashboard snapshot used when live analytics are unavailable.
#[must_use]
pub fn analytics_snapshot() -> AnalyticsSnapshot {
    let daily = [
        ("2025-01-20", 245, 18, 5),
        ("2025-01-21", 312, 24, 8),
        ("2025-01-22", 189, 15, 3),
        ("2025-01-23", 456, 32, 12),
        ("2025-01-24", 378, 28, 9),
        ("2025-01-25", 523, 41, 15),
        ("2025-01-26", 612, 48, 18),
    ]
    .into_iter()
    .map(|(date, views, likes, shares)| DailyTrend {
        date: date.to_string(),
        views,
        likes,
        shares,
    })
    .collect();

    let weekly = [
        ("Week 1", 1250, 6.8),
        ("Week 2", 1456, 7.2),
        ("Week 3", 1789, 8.1),
        ("Week 4", 2134, 7.9),
    ]
    .into_iter()
    .map(|(week, views, engagement)| WeeklyTrend {
        week: week.to_string(),
        views,
        engagement,
    })
    .collect();

    let monthly = [
        ("Oct", 3245, 8),
        ("Nov", 4567, 10),
        ("Dec", 5234, 12),
        ("Jan", 6789, 15),
    ]
    .into_iter()
    .map(|(month, views, projects)| MonthlyTrend {
        month: month.to_string(),
        views,
        projects,
    })
    .collect();

    let projects = [
        ("1", "E-Commerce Platform", 2456, 189, 45, 9.5, "web"),
        ("2", "AI Chat Application", 1890, 156, 32, 8.2, "ai"),
        ("3", "Mobile Fitness Tracker", 1234, 98, 21, 7.9, "mobile"),
    ]
    .into_iter()
    .map(
        |(id, title, views, likes, shares, engagement_rate, category)| ProjectAnalytics {
            id: id.to_string(),
            title: title.to_string(),
            views,
            likes,
            shares,
            engagement_rate,
            category: category.to_string(),
        },
    )
    .collect();

    let insights = [
        (
            "trend",
            "Growing Mobile Interest",
            "Mobile projects are gaining 23% more engagement this month",
            "positive",
            "Consider developing more mobile-focused projects",
        ),
        (
            "performance",
            "Peak Engagement Hours",
            "Most engagement occurs between 2-4 PM EST",
            "neutral",
            "Schedule content updates during peak hours",
        ),
        (
            "opportunity",
            "AI Project Potential",
            "AI projects show 15% higher conversion rates",
            "positive",
            "Expand AI project portfolio for better engagement",
        ),
    ]
    .into_iter()
    .map(|(kind, title, description, impact, recommendation)| Insight {
        kind: kind.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        impact: impact.to_string(),
        recommendation: recommendation.to_string(),
    })
    .collect();

    AnalyticsSnapshot {
        overview: AnalyticsOverview {
            total_views: 12450,
            total_likes: 892,
            total_shares: 234,
            total_comments: 156,
            avg_engagement_rate: 7.2,
            top_performing_project: "E-Commerce Platform".to_string(),
        },
        trends: Trends {
            daily,
            weekly,
            monthly,
        },
        projects,
        insights,
    }
}
