use crate::reddit::models::{Post, SearchResponse};
use crate::search::SearchQuery;
use reqwest::{Client, Error as ReqwestError, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_USER_AGENT: &str = "subreddit-search/0.1";

#[derive(Error, Debug)]
pub enum SearchApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Search API returned status {status}{}", format_detail(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("Unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

/// Error body the search API sends alongside a 4xx status
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Anything that can answer a subreddit keyword search (allows mocking for tests)
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, SearchApiError>;
}

/// HTTP client for the `/api/search` endpoint
#[derive(Clone)]
pub struct RedditSearchClient {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl RedditSearchClient {
    pub fn new(base_url: &str) -> Result<Self, SearchApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| SearchApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(SearchApiError::InvalidUrl(base_url.to_string()));
        }

        // Joining against a base without a trailing slash would drop its last segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the request URL; every user-supplied value is percent-encoded
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, SearchApiError> {
        let mut url = self
            .base_url
            .join("api/search")
            .map_err(|e| SearchApiError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("subreddit", &query.subreddit)
            .append_pair("keywords", &query.keywords)
            .append_pair("limit", &query.limit.to_string());

        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchBackend for RedditSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, SearchApiError> {
        let url = self.search_url(query)?;
        debug!("Search API request: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .ok();
            warn!("Search API error response ({}): {}", status, body);

            return Err(SearchApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        let search_response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Search API response did not match schema: {}", e);
            e
        })?;

        info!(
            "Search API returned {} post(s) for r/{}",
            search_response.results.len(),
            query.subreddit
        );

        Ok(search_response.results)
    }
}
