//! Storyvine Core — shared domain types and ports.
//!
//! This crate defines the story tree model, the `/story_data` wire payload,
//! snapshot change detection, and the traits infrastructure adapters
//! implement. It contains no HTTP or rendering code.

pub mod data;
pub mod fetch;
pub mod metadata;
pub mod scene;
pub mod surface;
