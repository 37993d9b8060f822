//! Jisho search client
//!
//! Issues `GET <base_url>?keyword=<word>` and decodes the body. There is no
//! timeout and no retry; a failure is returned to the caller as-is.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::Dictionary;
use crate::config::DEFAULT_JISHO_API_URL;
use crate::error::UpstreamError;
use crate::models::LookupResult;

#[derive(Debug, Clone)]
pub struct JishoClient {
    http: Client,
    base_url: String,
}

impl JishoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for JishoClient {
    fn default() -> Self {
        Self::new(DEFAULT_JISHO_API_URL)
    }
}

#[async_trait]
impl Dictionary for JishoClient {
    async fn search(&self, keyword: &str) -> Result<LookupResult, UpstreamError> {
        debug!(keyword, "Querying Jisho");

        // `query` percent-encodes the keyword
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_jisho() {
        let client = JishoClient::default();
        assert_eq!(client.base_url(), "https://jisho.org/api/v1/search/words");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_request_error() {
        // Port 9 (discard) on loopback is not served in test environments
        let client = JishoClient::new("http://127.0.0.1:9/api/v1/search/words");
        let result = client.search("犬").await;
        assert!(matches!(result, Err(UpstreamError::Request(_))));
    }
}
