pub mod analytics;
pub mod client;
pub mod error;
pub mod interactions;
pub mod live_stats;
pub mod loader;
pub mod session;

pub use analytics::{fetch_dashboard, AnalyticsDashboard, DashboardState};
pub use client::PortfolioClient;
pub use error::{ClientError, SessionError};
pub use interactions::{InteractionOutcome, InteractionTracker};
pub use live_stats::{LiveStatsPoller, LiveStatsState};
pub use loader::{fetch_portfolio_data, load_portfolio, ProjectsPayload, SkillsPayload};
pub use session::{
    generate_session_id, is_well_formed, FileSessionStore, MemorySessionStore, SessionProvider,
    SessionStore,
};
