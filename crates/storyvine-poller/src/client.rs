//! HTTP adapter for the `/story_data` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use storyvine_core::data::StoryData;
use storyvine_core::fetch::{FetchError, StoryFetch};

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client that GETs `{base_url}/story_data`.
///
/// Built without a request timeout: the poller's in-flight guard is the only
/// thing pacing requests, so a hung request holds off further polling rather
/// than piling up.
#[derive(Debug, Clone)]
pub struct HttpStoryClient {
    client: Client,
    base_url: String,
}

impl HttpStoryClient {
    /// Creates a client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the `STORYVINE_BASE_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STORYVINE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for HttpStoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl StoryFetch for HttpStoryClient {
    async fn fetch_story(&self) -> Result<StoryData, FetchError> {
        let response = self
            .client
            .get(format!("{}/story_data", self.base_url))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
