//! The polling loop: guard, change detection, error display.

use std::time::Duration;

use storyvine_core::data::{Snapshot, StoryData};
use storyvine_core::fetch::{FetchError, StoryFetch};
use storyvine_core::surface::DisplaySurface;
use storyvine_render::{RenderLimits, render_tree};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

/// Fixed polling cadence. Not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// Shown on transport or decode failure.
pub const FETCH_FAILED_TEXT: &str = "Failed to load story data. Is the backend running?";

/// Shown when an accepted payload carries no tree yet.
pub const WAITING_FOR_STORY_TEXT: &str = "Waiting for story to start...";

/// Shown when the tree trips the render limits.
pub const TREE_TOO_LARGE_TEXT: &str = "Story tree is too large to display.";

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A previous request was still in flight; this tick was dropped.
    Skipped,
    /// New payload accepted and rendered.
    Rendered,
    /// New payload accepted but it carried no tree yet.
    Waiting,
    /// Timestamp unchanged; nothing re-rendered.
    Unchanged,
    /// The backend reported an application-level error.
    BackendError,
    /// The server answered with a non-success status.
    HttpError,
    /// The request failed or the body did not decode.
    FetchFailed,
    /// The payload tripped the render limits.
    RenderFailed,
}

/// Polls a [`StoryFetch`] source and re-renders into a [`DisplaySurface`].
///
/// Owns all mutable poll state explicitly: the last accepted snapshot and
/// the in-flight guard. The snapshot is replaced wholesale on each accepted
/// update and lives for the whole session.
pub struct Poller<F, S> {
    fetch: F,
    surface: S,
    limits: RenderLimits,
    snapshot: Option<Snapshot>,
    in_flight: bool,
}

impl<F, S> Poller<F, S>
where
    F: StoryFetch,
    S: DisplaySurface,
{
    /// Creates a poller with default render limits and no snapshot.
    pub fn new(fetch: F, surface: S) -> Self {
        Self::with_limits(fetch, surface, RenderLimits::default())
    }

    /// Creates a poller with explicit render limits.
    pub fn with_limits(fetch: F, surface: S, limits: RenderLimits) -> Self {
        Self {
            fetch,
            surface,
            limits,
            snapshot: None,
            in_flight: false,
        }
    }

    /// The last accepted snapshot, if any tick has succeeded yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The display surface, for inspection.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs one poll attempt.
    ///
    /// Drops the tick if a request is already in flight. The guard is
    /// released on every completion path, so a failed tick never blocks
    /// future polls.
    pub async fn tick(&mut self) -> TickOutcome {
        if self.in_flight {
            debug!("previous request still in flight, skipping tick");
            return TickOutcome::Skipped;
        }
        self.in_flight = true;
        let outcome = self.tick_inner().await;
        self.in_flight = false;
        outcome
    }

    async fn tick_inner(&mut self) -> TickOutcome {
        let data = match self.fetch.fetch_story().await {
            Ok(data) => data,
            Err(FetchError::Status { status, reason }) => {
                warn!(status, %reason, "story data request rejected");
                self.surface.replace(&format!("Error: {reason}"));
                return TickOutcome::HttpError;
            }
            Err(err) => {
                warn!(%err, "story data request failed");
                self.surface.replace(FETCH_FAILED_TEXT);
                return TickOutcome::FetchFailed;
            }
        };

        if let Some(backend_error) = &data.error {
            // Keep the last known good rendering if there is one.
            if self.snapshot.is_none() {
                self.surface
                    .replace(&format!("Waiting for story data... ({backend_error})"));
            }
            debug!(%backend_error, "backend not ready");
            return TickOutcome::BackendError;
        }

        if !Snapshot::should_replace(self.snapshot.as_ref(), &data) {
            return TickOutcome::Unchanged;
        }

        self.accept(data)
    }

    fn accept(&mut self, data: StoryData) -> TickOutcome {
        let metadata = data.metadata.clone().unwrap_or_default();

        let rendered = match &data.story_tree {
            None => None,
            Some(tree) => {
                if let Some(duplicate_id) = tree.find_duplicate_id() {
                    warn!(duplicate_id, "story tree reuses an id, highlighting is ambiguous");
                }
                Some((
                    render_tree(Some(tree), &metadata, &self.limits),
                    tree.node_count(),
                ))
            }
        };

        match rendered {
            None => {
                self.snapshot = Some(Snapshot::from_accepted(data));
                self.surface.replace(WAITING_FOR_STORY_TEXT);
                TickOutcome::Waiting
            }
            Some((Ok(markup), node_count)) => {
                self.snapshot = Some(Snapshot::from_accepted(data));
                self.surface.replace(&markup);
                info!(node_count, "story tree re-rendered");
                TickOutcome::Rendered
            }
            Some((Err(render_error), node_count)) => {
                // Snapshot untouched so a later, smaller payload renders.
                error!(%render_error, node_count, "story tree exceeded render limits");
                self.surface.replace(TREE_TOO_LARGE_TEXT);
                TickOutcome::RenderFailed
            }
        }
    }

    /// Polls forever at [`POLL_INTERVAL`], first attempt immediate.
    ///
    /// Never returns: every failure class is surfaced as display text and
    /// the next tick is the implicit retry.
    pub async fn run(&mut self) {
        let mut interval = tokio::time::interval(POLL_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let outcome = self.tick().await;
            debug!(?outcome, "poll tick");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyvine_test_support::{RecordingSurface, ScriptedFetch, sample_story_data};

    #[tokio::test]
    async fn test_tick_is_skipped_while_a_request_is_in_flight() {
        // Arrange — force the guard on, as if a request were pending.
        let fetch = ScriptedFetch::with_responses(vec![Ok(sample_story_data(1))]);
        let mut poller = Poller::new(fetch, RecordingSurface::default());
        poller.in_flight = true;

        // Act
        let outcome = poller.tick().await;

        // Assert — dropped, nothing fetched or displayed.
        assert_eq!(outcome, TickOutcome::Skipped);
        assert!(poller.surface().frames().is_empty());
        assert!(poller.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_guard_is_released_after_a_failed_tick() {
        let fetch = ScriptedFetch::with_responses(vec![
            Err(FetchError::Transport("connection refused".to_string())),
            Ok(sample_story_data(1)),
        ]);
        let mut poller = Poller::new(fetch, RecordingSurface::default());

        let first = poller.tick().await;
        let second = poller.tick().await;

        assert_eq!(first, TickOutcome::FetchFailed);
        assert_eq!(second, TickOutcome::Rendered);
    }
}
