mod interact;
mod render;
mod show;
mod stats;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use folio_client::{FileSessionStore, PortfolioClient, SessionProvider};
use folio_core::TimeRange;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "folio-cli")]
#[command(about = "Terminal front end for the portfolio API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the profile, project gallery and skills grid
    Show {
        /// Only list projects in this category
        #[arg(long)]
        category: Option<String>,
        /// Only list skills in this category
        #[arg(long)]
        skill_category: Option<String>,
        /// Skip the network and render the built-in sample data
        #[arg(long)]
        fallback: bool,
        /// Print the loaded data as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Show live stats once, or keep polling with --watch
    Stats {
        /// Keep refreshing; type `a` to toggle the analytics overlay, `q` to close it
        #[arg(long)]
        watch: bool,
    },
    /// Print the analytics dashboard
    Dashboard {
        /// Time range (7d, 30d, 90d, 1y); defaults to FOLIO_ANALYTICS_RANGE
        #[arg(long)]
        range: Option<TimeRange>,
        #[arg(long, value_enum, default_value_t = DashboardView::Overview)]
        view: DashboardView,
    },
    /// Record a view of a project
    View { project_id: String },
    /// Toggle this session's like on a project
    Like { project_id: String },
    /// Toggle this session's favorite on a project
    Favorite { project_id: String },
    /// Record a share and print the link to open
    Share {
        project_id: String,
        /// twitter, linkedin or copy
        #[arg(long, default_value = "copy")]
        platform: String,
        /// Page URL being shared
        #[arg(long)]
        url: String,
        /// Project title used in the share text
        #[arg(long)]
        title: Option<String>,
    },
    /// Print this client's session identifier
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DashboardView {
    Overview,
    Projects,
    Insights,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = folio_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Arc::new(PortfolioClient::from_config(&config)?);
    let sessions = SessionProvider::new(FileSessionStore::new(&config.session_path));

    tracing::debug!(env = %config.env, api = %config.api_base_url, "folio-cli starting");

    match cli.command {
        Some(Commands::Show {
            category,
            skill_category,
            fallback,
            json,
        }) => {
            show::run_show(
                &client,
                category.as_deref(),
                skill_category.as_deref(),
                fallback,
                json,
            )
            .await?;
        }
        Some(Commands::Stats { watch }) => {
            let interval = std::time::Duration::from_secs(config.live_stats_interval_secs);
            if watch {
                stats::run_watch(client, interval, config.analytics_range).await?;
            } else {
                stats::run_stats_once(client).await;
            }
        }
        Some(Commands::Dashboard { range, view }) => {
            stats::run_dashboard(client, range.unwrap_or(config.analytics_range), view).await;
        }
        Some(Commands::View { project_id }) => {
            interact::run_view(client, &project_id, &sessions.session_id()).await;
        }
        Some(Commands::Like { project_id }) => {
            interact::run_toggle(
                client,
                &project_id,
                &sessions.session_id(),
                interact::Toggle::Like,
            )
            .await;
        }
        Some(Commands::Favorite { project_id }) => {
            interact::run_toggle(
                client,
                &project_id,
                &sessions.session_id(),
                interact::Toggle::Favorite,
            )
            .await;
        }
        Some(Commands::Share {
            project_id,
            platform,
            url,
            title,
        }) => {
            let title = title.unwrap_or_else(|| project_id.clone());
            interact::run_share(
                client,
                &project_id,
                &sessions.session_id(),
                &platform,
                &url,
                &title,
            )
            .await;
        }
        Some(Commands::Session) => {
            println!("{}", sessions.session_id());
            println!("stored at {}", sessions.store().path().display());
        }
        None => {
            show::run_show(&client, None, None, false, false).await?;
        }
    }

    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
