//! Canonical story fixtures.

use serde_json::json;
use storyvine_core::data::StoryData;
use storyvine_core::metadata::StoryMetadata;
use storyvine_core::scene::{Choice, SceneNode};

/// A one-scene tree with a single leaf choice.
#[must_use]
pub fn sample_tree() -> SceneNode {
    SceneNode {
        id: "1".to_string(),
        text: "Start".to_string(),
        child_choices: vec![Choice {
            id: "c1".to_string(),
            text: "Go left".to_string(),
            child_scene: None,
        }],
    }
}

/// A successful payload around [`sample_tree`], with the root scene marked
/// as currently processing and the given timestamp.
#[must_use]
pub fn sample_story_data(timestamp: i64) -> StoryData {
    StoryData {
        story_tree: Some(sample_tree()),
        metadata: Some(StoryMetadata {
            current_id: Some("1".to_string()),
            last_added_id: None,
            timestamp: Some(json!(timestamp)),
        }),
        error: None,
    }
}
