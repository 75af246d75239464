//! `show`: the hero, gallery and skills sections.

use folio_client::{load_portfolio, PortfolioClient};
use folio_core::display::{category_filters, filter_by_category, SkillsSummary, ALL_CATEGORIES};
use folio_core::{derive_categories, fallback, PortfolioData, ProjectCollection, SkillCollection};

use crate::{print_lines, render};

/// Built-in sample data shown when the API cannot be reached.
pub(crate) fn fallback_data() -> PortfolioData {
    let projects = fallback::projects();
    let skills = fallback::skills();
    PortfolioData {
        portfolio: fallback::portfolio(),
        projects: ProjectCollection {
            total: projects.len() as u64,
            items: projects,
        },
        skills: SkillCollection {
            categories: derive_categories(&skills),
            items: skills,
        },
    }
}

/// Loads the portfolio and prints each section.
///
/// # Errors
///
/// Returns an error only if `--json` output cannot be serialised.
pub(crate) async fn run_show(
    client: &PortfolioClient,
    category: Option<&str>,
    skill_category: Option<&str>,
    use_fallback: bool,
    json: bool,
) -> anyhow::Result<()> {
    let data = if use_fallback {
        fallback_data()
    } else if let Some(data) = load_portfolio(client).await {
        data
    } else {
        eprintln!("portfolio API unavailable; showing sample data");
        fallback_data()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_lines(&render::profile(&data.portfolio));
    println!();

    let selected = category.unwrap_or(ALL_CATEGORIES);
    let projects = filter_by_category(&data.projects.items, selected);
    println!("PROJECTS ({} total)", data.projects.total);
    print_lines(&render::projects(
        &projects,
        &category_filters(&data.projects.items),
        selected,
    ));
    println!();

    let skills = filter_by_category(
        &data.skills.items,
        skill_category.unwrap_or(ALL_CATEGORIES),
    );
    let mut skill_filters = vec![ALL_CATEGORIES.to_string()];
    skill_filters.extend(data.skills.categories.iter().cloned());
    println!("SKILLS");
    print_lines(&render::skills(
        &skills,
        SkillsSummary::from_skills(&data.skills.items),
        &skill_filters,
    ));

    Ok(())
}
