//! Scripted implementation of the fetch port.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use storyvine_core::data::StoryData;
use storyvine_core::fetch::{FetchError, StoryFetch};

/// A [`StoryFetch`] that replays a fixed sequence of outcomes.
///
/// Once the script is exhausted, further fetches fail with a transport
/// error, so an over-polling test fails loudly instead of silently
/// repeating data.
pub struct ScriptedFetch {
    responses: Mutex<VecDeque<Result<StoryData, FetchError>>>,
}

impl ScriptedFetch {
    /// Creates a fetch that yields `responses` in order.
    #[must_use]
    pub fn with_responses(responses: Vec<Result<StoryData, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl StoryFetch for ScriptedFetch {
    async fn fetch_story(&self) -> Result<StoryData, FetchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
    }
}
