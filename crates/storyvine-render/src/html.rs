//! Recursive markup generation.

use std::fmt::Write as _;

use storyvine_core::metadata::StoryMetadata;
use storyvine_core::scene::{Choice, SceneNode};
use thiserror::Error;

/// Ceilings on the rendered tree.
///
/// The backend is responsible for producing a finite, acyclic tree; these
/// limits keep a malformed payload from driving unbounded recursion or an
/// unbounded output string.
#[derive(Debug, Clone, Copy)]
pub struct RenderLimits {
    /// Maximum scene nesting depth.
    pub max_depth: usize,
    /// Maximum number of scenes plus choices rendered.
    pub max_nodes: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 10_000,
        }
    }
}

/// Rendering failures. Both indicate a tree larger than the display is
/// willing to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Scene nesting exceeded [`RenderLimits::max_depth`].
    #[error("story tree deeper than the display limit of {limit}")]
    DepthExceeded {
        /// The configured depth ceiling.
        limit: usize,
    },

    /// Total node count exceeded [`RenderLimits::max_nodes`].
    #[error("story tree larger than the display limit of {limit} nodes")]
    NodeBudgetExceeded {
        /// The configured node ceiling.
        limit: usize,
    },
}

/// Renders a full tree wrapped in a top-level `<ul>`, ready for injection
/// into the display surface.
pub fn render_tree(
    root: Option<&SceneNode>,
    metadata: &StoryMetadata,
    limits: &RenderLimits,
) -> Result<String, RenderError> {
    Ok(format!("<ul>{}</ul>", render_node(root, metadata, limits)?))
}

/// Renders a single scene and its choices recursively.
///
/// Returns the empty string for an absent node. Text fields are inserted
/// verbatim; the backend is a trusted collaborator and no HTML escaping is
/// applied.
pub fn render_node(
    node: Option<&SceneNode>,
    metadata: &StoryMetadata,
    limits: &RenderLimits,
) -> Result<String, RenderError> {
    let Some(node) = node else {
        return Ok(String::new());
    };
    let mut walker = Walker {
        metadata,
        limits,
        nodes_emitted: 0,
    };
    let mut out = String::new();
    walker.scene(node, 1, &mut out)?;
    Ok(out)
}

struct Walker<'a> {
    metadata: &'a StoryMetadata,
    limits: &'a RenderLimits,
    nodes_emitted: usize,
}

impl Walker<'_> {
    fn spend_node(&mut self) -> Result<(), RenderError> {
        self.nodes_emitted += 1;
        if self.nodes_emitted > self.limits.max_nodes {
            return Err(RenderError::NodeBudgetExceeded {
                limit: self.limits.max_nodes,
            });
        }
        Ok(())
    }

    fn is_current(&self, id: &str) -> bool {
        self.metadata.current_id.as_deref() == Some(id)
    }

    fn scene(&mut self, node: &SceneNode, depth: usize, out: &mut String) -> Result<(), RenderError> {
        if depth > self.limits.max_depth {
            return Err(RenderError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }
        self.spend_node()?;

        let mut classes = String::from("scene");
        if self.is_current(&node.id) {
            classes.push_str(" processing");
        }
        if self.metadata.last_added_id.as_deref() == Some(node.id.as_str()) {
            classes.push_str(" added");
        }

        out.push_str("<li>");
        let _ = write!(out, r#"<div class="{classes}" data-id="{}">"#, node.id);
        let _ = write!(out, r#"<span class="scene-text">{}</span>"#, node.text);

        if !node.child_choices.is_empty() {
            out.push_str(r#"<ul class="choice-list">"#);
            for choice in &node.child_choices {
                self.choice(choice, depth, out)?;
            }
            out.push_str("</ul>");
        }

        out.push_str("</div>");
        out.push_str("</li>");
        Ok(())
    }

    fn choice(&mut self, choice: &Choice, depth: usize, out: &mut String) -> Result<(), RenderError> {
        self.spend_node()?;

        let mut classes = String::from("choice");
        if self.is_current(&choice.id) {
            classes.push_str(" processing");
        }

        let _ = write!(out, r#"<li class="{classes}" data-id="{}">"#, choice.id);
        let _ = write!(out, r#"<span class="choice-text">➡️ {}</span>"#, choice.text);

        if let Some(scene) = &choice.child_scene {
            out.push_str("<ul>");
            self.scene(scene, depth + 1, out)?;
            out.push_str("</ul>");
        } else {
            out.push_str(r#" <span class="leaf-marker">(Branch End)</span>"#);
            if self.is_current(&choice.id) {
                out.push_str(r#" <span class="processing-marker">(⚙️ Processing...)</span>"#);
            }
        }

        out.push_str("</li>");
        Ok(())
    }
}
