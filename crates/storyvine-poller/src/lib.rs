//! Storyvine Poller — fetches the story payload on a fixed cadence and
//! re-renders it into a display surface.
//!
//! One poll may be in flight at a time; ticks arriving while a request is
//! pending are dropped, not queued. Errors are surfaced as in-place display
//! text and never terminate the loop.

mod client;
mod poller;

pub use client::{DEFAULT_BASE_URL, HttpStoryClient};
pub use poller::{
    FETCH_FAILED_TEXT, POLL_INTERVAL, Poller, TREE_TOO_LARGE_TEXT, TickOutcome,
    WAITING_FOR_STORY_TEXT,
};
