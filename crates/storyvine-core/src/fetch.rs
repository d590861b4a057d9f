//! Port for fetching the story payload.

use async_trait::async_trait;
use thiserror::Error;

use crate::data::StoryData;

/// Failure classes for a single poll attempt.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("server returned {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status reason phrase, shown to the user in place of the tree.
        reason: String,
    },

    /// The request never completed (connection refused, reset, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The body was not valid JSON for the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Abstraction over the `/story_data` source.
///
/// The production implementation issues an HTTP GET; tests script outcomes
/// directly.
#[async_trait]
pub trait StoryFetch: Send + Sync {
    /// Fetches the current story payload.
    async fn fetch_story(&self) -> Result<StoryData, FetchError>;
}
