//! Youku Open API Client
//!
//! HTTP client for the Youku Open API v2. Each operation is one GET.
//!
//! Two layers are exposed: `fetch_list` / `fetch_detail` return a
//! [`YoukuError`] the caller can act on, while the named operations
//! (`videos_by_category`, `show_detail`, ...) log failures and degrade to an
//! empty result, so "upstream unreachable" renders the same as "no matches".

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::normalize::{api_error, decode_detail, decode_list, decode_list_lossy};
use super::query::{
    build_comment_query, build_detail_query, build_keyword_query, build_list_query, QuerySpec,
};
use super::types::*;
use crate::config::Config;

/// Youku API Error types
#[derive(Debug, thiserror::Error)]
pub enum YoukuError {
    /// HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Error object returned by the API
    #[error("API error {code}: {description}")]
    Api { code: i64, description: String },
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Detail lookup returned no entity
    #[error("Not found")]
    NotFound,
}

/// Youku API Client
#[derive(Clone)]
pub struct YoukuClient {
    http: Client,
    api_root: String,
    client_id: String,
    user_agent: String,
}

impl YoukuClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_root` - API base URL (e.g., "https://openapi.youku.com/v2")
    /// * `client_id` - Youku application key sent with every request
    /// * `user_agent` - User-Agent header value
    /// * `timeout` - Transport timeout per request
    pub fn new(
        api_root: &str,
        client_id: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, YoukuError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| YoukuError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Create from application config
    pub fn from_config(config: &Config) -> Result<Self, YoukuError> {
        Self::new(
            &config.api_root,
            &config.client_id,
            &config.user_agent,
            Duration::from_millis(config.fetch_timeout_ms),
        )
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Perform the GET and return the body text
    async fn get_text(&self, spec: &QuerySpec) -> Result<String, YoukuError> {
        let url = spec.url(&self.api_root);

        debug!("Youku API request: {}", spec.path);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| YoukuError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| YoukuError::Network(e.to_string()))?;

        if !status.is_success() {
            // Youku reports bad parameters as 400 with an error object
            return Err(api_error(&text).unwrap_or(YoukuError::Http(status.as_u16())));
        }

        Ok(text)
    }

    // ========================================================================
    // Strict layer
    // ========================================================================

    /// Fetch and decode a list envelope
    pub async fn fetch_list<T: Entity>(&self, spec: &QuerySpec) -> Result<Page<T>, YoukuError> {
        let text = self.get_text(spec).await?;
        decode_list(&text).map_err(|e| {
            debug!("Response text: {}", text.chars().take(500).collect::<String>());
            e
        })
    }

    /// Fetch and decode a single entity
    pub async fn fetch_detail<T: Entity>(&self, spec: &QuerySpec) -> Result<T, YoukuError> {
        let text = self.get_text(spec).await?;
        decode_detail(&text)
    }

    async fn list_or_empty<T: Entity>(&self, spec: &QuerySpec) -> Vec<T> {
        match self.get_text(spec).await {
            Ok(text) => decode_list_lossy(&text).0,
            Err(e) => {
                warn!(path = spec.path, "Youku list request degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn detail_or_none<T: Entity>(&self, spec: &QuerySpec) -> Option<T> {
        match self.fetch_detail::<T>(spec).await {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(path = spec.path, "Youku detail request degraded to none: {}", e);
                None
            }
        }
    }

    // ========================================================================
    // Videos
    // ========================================================================

    /// Videos of a category/genre
    pub async fn videos_by_category(
        &self,
        category: &str,
        genre: &str,
        period: &str,
        orderby: &str,
        page: u32,
        count: u32,
    ) -> Vec<Video> {
        let spec = build_list_query(
            &self.client_id,
            EntityKind::Video,
            category,
            genre,
            period,
            orderby,
            page,
            count,
        );
        self.list_or_empty(&spec).await
    }

    /// Video detail with screenshots
    pub async fn video_detail(&self, video_id: &str) -> Option<VideoDetail> {
        let spec = build_detail_query(&self.client_id, EntityKind::Video, video_id);
        self.detail_or_none(&spec).await
    }

    /// Keyword search over videos
    pub async fn search_videos(
        &self,
        keyword: &str,
        category: &str,
        period: &str,
        orderby: &str,
        count: u32,
    ) -> Vec<Video> {
        debug!(keyword, category, period, orderby, count, "query videos");
        let spec = build_keyword_query(
            &self.client_id,
            EntityKind::Video,
            keyword,
            category,
            period,
            orderby,
            count,
        );
        self.list_or_empty(&spec).await
    }

    // ========================================================================
    // Shows
    // ========================================================================

    /// Shows of a category/genre
    pub async fn shows_by_category(
        &self,
        category: &str,
        genre: &str,
        orderby: &str,
        page: u32,
        count: u32,
    ) -> Vec<Show> {
        let spec = build_list_query(
            &self.client_id,
            EntityKind::Show,
            category,
            genre,
            "",
            orderby,
            page,
            count,
        );
        self.list_or_empty(&spec).await
    }

    /// Show detail
    pub async fn show_detail(&self, show_id: &str) -> Option<ShowDetail> {
        let spec = build_detail_query(&self.client_id, EntityKind::Show, show_id);
        self.detail_or_none(&spec).await
    }

    /// Keyword search over shows
    pub async fn search_shows(
        &self,
        keyword: &str,
        category: &str,
        unite: u32,
        orderby: &str,
        count: u32,
    ) -> Vec<Show> {
        debug!(keyword, category, unite, orderby, count, "query shows");
        let spec = build_keyword_query(
            &self.client_id,
            EntityKind::Show,
            keyword,
            category,
            &unite.to_string(),
            orderby,
            count,
        );
        self.list_or_empty(&spec).await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Latest comments of a video
    pub async fn comments_by_video(&self, video_id: &str, count: u32) -> Vec<Comment> {
        let spec = build_comment_query(&self.client_id, video_id, count);
        self.list_or_empty(&spec).await
    }
}
