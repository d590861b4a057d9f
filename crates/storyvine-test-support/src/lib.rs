//! Shared test fixtures and scripted port implementations for the Storyvine
//! viewer.

mod fetch;
mod fixtures;
mod server;
mod surface;

pub use fetch::ScriptedFetch;
pub use fixtures::{sample_story_data, sample_tree};
pub use server::{ScriptedResponse, StoryDataServer};
pub use surface::RecordingSurface;
