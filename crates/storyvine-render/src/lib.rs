//! Storyvine Render — story tree to nested HTML markup.
//!
//! A pure mapping from `(SceneNode, StoryMetadata)` to a markup string.
//! Scenes and choices matching the metadata's `current_id` get a
//! `processing` class, the scene matching `last_added_id` gets `added`.

mod html;

pub use html::{RenderError, RenderLimits, render_node, render_tree};
