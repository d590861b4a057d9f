//! The `/story_data` wire payload and the accepted snapshot.

use serde::{Deserialize, Serialize};

use crate::metadata::StoryMetadata;
use crate::scene::SceneNode;

/// A `/story_data` response body.
///
/// A well-formed body either carries a tree and metadata, or an `error`
/// string while the backend is not ready. Every field is optional on the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryData {
    /// Root of the story tree, absent before the story starts.
    #[serde(default)]
    pub story_tree: Option<SceneNode>,
    /// Display and change-detection metadata.
    #[serde(default)]
    pub metadata: Option<StoryMetadata>,
    /// Backend-reported error, e.g. while the story state is still being
    /// written.
    #[serde(default)]
    pub error: Option<String>,
}

/// The last successfully rendered payload.
///
/// Replaced wholesale on each accepted update, never merged. Lives for the
/// whole viewer session once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The rendered tree, if the story had started.
    pub story_tree: Option<SceneNode>,
    /// Metadata the tree was rendered with.
    pub metadata: Option<StoryMetadata>,
}

impl Snapshot {
    /// Builds a snapshot from an accepted payload, discarding the error
    /// field (an accepted payload has none).
    #[must_use]
    pub fn from_accepted(data: StoryData) -> Self {
        Self {
            story_tree: data.story_tree,
            metadata: data.metadata,
        }
    }

    /// Decides whether an incoming payload replaces the current snapshot.
    ///
    /// Replace when there is no prior snapshot, when either side lacks
    /// metadata (no comparison is possible), or when the timestamps differ.
    /// Equal timestamps mean the payload is the one already on screen.
    #[must_use]
    pub fn should_replace(prev: Option<&Snapshot>, incoming: &StoryData) -> bool {
        let Some(prev) = prev else {
            return true;
        };
        match (&prev.metadata, &incoming.metadata) {
            (Some(old), Some(new)) => old.timestamp != new.timestamp,
            _ => true,
        }
    }
}
