//! Out-of-band annotations applied to the tree during rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display and change-detection metadata accompanying a story tree.
///
/// Not part of the tree itself; applied cross-cut during rendering by id
/// match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    /// Id of the scene or choice currently being processed by the backend.
    #[serde(default)]
    pub current_id: Option<String>,
    /// Id of the most recently added scene.
    #[serde(default)]
    pub last_added_id: Option<String>,
    /// Opaque change marker set by the backend. Compared for equality only,
    /// never ordered.
    #[serde(default)]
    pub timestamp: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fields_optional_on_the_wire() {
        let metadata: StoryMetadata = serde_json::from_str("{}").unwrap();

        assert_eq!(metadata, StoryMetadata::default());
    }

    #[test]
    fn test_timestamp_accepts_any_json_value() {
        let numeric: StoryMetadata =
            serde_json::from_value(json!({"timestamp": 1712.5})).unwrap();
        let textual: StoryMetadata =
            serde_json::from_value(json!({"timestamp": "2026-08-29T10:00:00Z"})).unwrap();

        assert_eq!(numeric.timestamp, Some(json!(1712.5)));
        assert_eq!(textual.timestamp, Some(json!("2026-08-29T10:00:00Z")));
    }
}
