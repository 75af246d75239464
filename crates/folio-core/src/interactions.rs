//! Per-project interaction counters and the request/response bodies of the
//! `/api/interactions/*` endpoints.
//!
//! Reconciliation rule per field:
//!
//! | Field                  | Source of truth                          |
//! |------------------------|------------------------------------------|
//! | `views`                | server count when returned, else local +1 |
//! | `shares`               | local +1 after a successful request       |
//! | `likes`, `liked`       | server response                          |
//! | `favorites`, `favorited` | server response                        |
//! | `comments`             | stats snapshot only                      |

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCounters {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(rename = "userInteractions", default)]
    pub user_interactions: UserInteractions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInteractions {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub viewed: bool,
}

/// Body of `POST /api/interactions/view|like|favorite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRequest<'a> {
    #[serde(rename = "projectId")]
    pub project_id: &'a str,
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

/// Body of `POST /api/interactions/share`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest<'a> {
    #[serde(rename = "projectId")]
    pub project_id: &'a str,
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
    pub platform: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    pub likes: u64,
    pub liked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FavoriteResponse {
    pub favorites: u64,
    pub favorited: bool,
}

/// The view endpoint is not required to echo a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ViewResponse {
    #[serde(default)]
    pub views: Option<u64>,
}

impl InteractionCounters {
    pub fn apply_like(&mut self, response: LikeResponse) {
        self.likes = response.likes;
        self.user_interactions.liked = response.liked;
    }

    pub fn apply_favorite(&mut self, response: FavoriteResponse) {
        self.favorites = response.favorites;
        self.user_interactions.favorited = response.favorited;
    }

    pub fn apply_view(&mut self, response: ViewResponse) {
        self.views = response.views.unwrap_or(self.views.saturating_add(1));
        self.user_interactions.viewed = true;
    }

    pub fn apply_share(&mut self) {
        self.shares = self.shares.saturating_add(1);
    }
}
