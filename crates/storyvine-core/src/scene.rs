//! The branching story tree: scenes connected by choices.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A point in the story with narrative text and outgoing choices.
///
/// Children are reached only via choices; a scene never links to another
/// scene directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Narrative text for this scene.
    pub text: String,
    /// Outgoing choices, in presentation order.
    #[serde(default)]
    pub child_choices: Vec<Choice>,
}

/// A labeled edge from a scene to either another scene or a terminal
/// branch end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Label text for this choice.
    pub text: String,
    /// The scene this choice leads to; `None` marks a branch end.
    #[serde(default)]
    pub child_scene: Option<Box<SceneNode>>,
}

impl SceneNode {
    /// Counts scenes and choices in this subtree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 1;
        for choice in &self.child_choices {
            count += 1;
            if let Some(scene) = &choice.child_scene {
                count += scene.node_count();
            }
        }
        count
    }

    /// Scans the subtree for an id carried by more than one scene or choice.
    ///
    /// Metadata highlighting matches by id, so a duplicate makes the match
    /// ambiguous. Returns the first duplicate found, in pre-order.
    #[must_use]
    pub fn find_duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.scan_ids(&mut seen)
    }

    fn scan_ids<'a>(&'a self, seen: &mut HashSet<&'a str>) -> Option<&'a str> {
        if !seen.insert(self.id.as_str()) {
            return Some(self.id.as_str());
        }
        for choice in &self.child_choices {
            if !seen.insert(choice.id.as_str()) {
                return Some(choice.id.as_str());
            }
            if let Some(scene) = &choice.child_scene {
                if let Some(dup) = scene.scan_ids(seen) {
                    return Some(dup);
                }
            }
        }
        None
    }
}
