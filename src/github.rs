use crate::error::{PortfolioError, Result};
use crate::identifier::Identifier;
use crate::types::RawMetadata;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Client against another API root, e.g. an Enterprise host or a local mock
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Portfolio Projects/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        // Url::join drops the last segment unless the base ends with '/'
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(GitHubClient { client, token, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => {
                Err(PortfolioError::NotFound(format!("Resource not found: {}", url)))
            }
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if rate_limit_remaining == Some(0) =>
            {
                Err(PortfolioError::RateLimitExceeded(format!(
                    "API rate limit exhausted while requesting {}",
                    url
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch metadata for a single repository
    pub async fn get_repository(&self, identifier: &Identifier) -> Result<RawMetadata> {
        let url = self.base_url.join(&identifier.api_path())?;
        debug!(identifier = %identifier, %url, "Requesting repository metadata");

        let response = self.make_request(url).await?;
        // Decode from text so a malformed body is reported as a JSON error
        let body = response.text().await?;
        let metadata: RawMetadata = serde_json::from_str(&body)?;
        Ok(metadata)
    }
}
