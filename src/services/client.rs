//! HTTP client service
//!
//! Encapsulates the single request to the OAuth usage endpoint

use crate::config::ApiConfig;
use crate::models::credentials::AccessToken;
use crate::models::usage::UsageSnapshot;
use crate::utils::error::{AppError, AppResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::debug;

/// Usage endpoint path, relative to the base URL
pub const USAGE_PATH: &str = "/api/oauth/usage";

/// Beta header required for the OAuth API
pub const ANTHROPIC_BETA_HEADER: &str = "anthropic-beta";
pub const ANTHROPIC_BETA_VALUE: &str = "oauth-2025-04-20";

/// Usage API client
#[derive(Debug, Clone)]
pub struct UsageClient {
    client: Client,
    base_url: String,
}

impl UsageClient {
    /// Create a new client instance
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full endpoint URL
    pub fn usage_url(&self) -> String {
        format!("{}{}", self.base_url, USAGE_PATH)
    }

    /// Fetch the current usage snapshot. Single attempt, no retry.
    pub async fn fetch_usage(&self, token: &AccessToken) -> AppResult<UsageSnapshot> {
        let url = self.usage_url();
        debug!("Fetching usage from {}", url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ANTHROPIC_BETA_HEADER, HeaderValue::from_static(ANTHROPIC_BETA_VALUE));

        let response = self.client.get(&url).headers(headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Usage API request failed: {}", status);
            // The status is the error; an unreadable body is reported as empty
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let usage: UsageSnapshot = serde_json::from_str(&body)?;
        debug!(
            "Usage fetched: 5h {}%, 7d {}%",
            usage.five_hour.utilization, usage.seven_day.utilization
        );

        Ok(usage)
    }
}
