//! HTTP client for the portfolio REST API.
//!
//! Wraps `reqwest` with typed request/response bodies for every endpoint the
//! page consumes. Methods here are plain fallible calls; the best-effort
//! policies (log and absorb, fall back, keep stale data) live in the
//! [`crate::interactions`], [`crate::loader`], [`crate::live_stats`] and
//! [`crate::analytics`] layers built on top.

use std::time::Duration;

use folio_core::{
    AnalyticsSnapshot, AppConfig, FavoriteResponse, InteractionCounters, InteractionRequest,
    LikeResponse, LiveStats, Portfolio, ShareRequest, TimeRange, ViewResponse,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::loader::{ProjectsPayload, SkillsPayload};

/// Client for the portfolio REST API.
///
/// Use [`PortfolioClient::from_config`] in the binary or
/// [`PortfolioClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    client: Client,
    base_url: Url,
}

impl PortfolioClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL is not an absolute http(s) URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise to exactly one trailing slash so path segments append
        // below any prefix instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        Ok(Self { client, base_url })
    }

    /// `GET /api/portfolio`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn get_portfolio(&self) -> Result<Portfolio, ClientError> {
        self.get_json(self.endpoint(&["api", "portfolio"]), "portfolio")
            .await
    }

    /// `GET /api/projects`, accepting either a bare array or a wrapped object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a
    /// body that is neither shape.
    pub async fn get_projects(&self) -> Result<ProjectsPayload, ClientError> {
        self.get_json(self.endpoint(&["api", "projects"]), "projects")
            .await
    }

    /// `GET /api/skills`, accepting either a bare array or a wrapped object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a
    /// body that is neither shape.
    pub async fn get_skills(&self) -> Result<SkillsPayload, ClientError> {
        self.get_json(self.endpoint(&["api", "skills"]), "skills")
            .await
    }

    /// `GET /api/analytics/live-stats`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn get_live_stats(&self) -> Result<LiveStats, ClientError> {
        self.get_json(
            self.endpoint(&["api", "analytics", "live-stats"]),
            "live-stats",
        )
        .await
    }

    /// `GET /api/analytics/dashboard?range=...`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn get_dashboard(&self, range: TimeRange) -> Result<AnalyticsSnapshot, ClientError> {
        let mut url = self.endpoint(&["api", "analytics", "dashboard"]);
        url.query_pairs_mut().append_pair("range", range.as_str());
        self.get_json(url, &format!("dashboard(range={range})"))
            .await
    }

    /// `GET /api/interactions/{project_id}/stats`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn get_interaction_stats(
        &self,
        project_id: &str,
    ) -> Result<InteractionCounters, ClientError> {
        let url = self.endpoint(&["api", "interactions", project_id, "stats"]);
        self.get_json(url, &format!("interaction stats(project={project_id})"))
            .await
    }

    /// `POST /api/interactions/view`.
    ///
    /// The endpoint is not required to echo a count, so an empty or
    /// non-JSON body yields a [`ViewResponse`] without one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-2xx status.
    pub async fn post_view(
        &self,
        project_id: &str,
        session_id: &str,
    ) -> Result<ViewResponse, ClientError> {
        let body = InteractionRequest {
            project_id,
            session_id,
        };
        let text = self
            .post_text(self.endpoint(&["api", "interactions", "view"]), &body)
            .await?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    /// `POST /api/interactions/like`; the response carries the new count
    /// and flag.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a
    /// body missing `likes`/`liked`.
    pub async fn post_like(
        &self,
        project_id: &str,
        session_id: &str,
    ) -> Result<LikeResponse, ClientError> {
        let body = InteractionRequest {
            project_id,
            session_id,
        };
        self.post_json(
            self.endpoint(&["api", "interactions", "like"]),
            &body,
            &format!("like(project={project_id})"),
        )
        .await
    }

    /// `POST /api/interactions/favorite`; the response carries the new count
    /// and flag.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a
    /// body missing `favorites`/`favorited`.
    pub async fn post_favorite(
        &self,
        project_id: &str,
        session_id: &str,
    ) -> Result<FavoriteResponse, ClientError> {
        let body = InteractionRequest {
            project_id,
            session_id,
        };
        self.post_json(
            self.endpoint(&["api", "interactions", "favorite"]),
            &body,
            &format!("favorite(project={project_id})"),
        )
        .await
    }

    /// `POST /api/interactions/share`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-2xx status.
    pub async fn post_share(
        &self,
        project_id: &str,
        session_id: &str,
        platform: &str,
    ) -> Result<(), ClientError> {
        let body = ShareRequest {
            project_id,
            session_id,
            platform,
        };
        self.post_text(self.endpoint(&["api", "interactions", "share"]), &body)
            .await?;
        Ok(())
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path; the constructor rejects other schemes.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let body = Self::success_body(response, &url).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        context: &str,
    ) -> Result<T, ClientError> {
        let text = self.post_text(url, body).await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    async fn post_text<B: Serialize>(&self, url: Url, body: &B) -> Result<String, ClientError> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        Self::success_body(response, &url).await
    }

    async fn success_body(response: reqwest::Response, url: &Url) -> Result<String, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
