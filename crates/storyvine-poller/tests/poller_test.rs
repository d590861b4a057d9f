//! Poll-loop behavior against a scripted fetch port.

use serde_json::json;
use storyvine_core::data::StoryData;
use storyvine_core::fetch::FetchError;
use storyvine_core::metadata::StoryMetadata;
use storyvine_core::scene::{Choice, SceneNode};
use storyvine_poller::{
    FETCH_FAILED_TEXT, Poller, TREE_TOO_LARGE_TEXT, TickOutcome, WAITING_FOR_STORY_TEXT,
};
use storyvine_render::RenderLimits;
use storyvine_test_support::{RecordingSurface, ScriptedFetch, sample_story_data};

fn poller_with(
    responses: Vec<Result<StoryData, FetchError>>,
) -> Poller<ScriptedFetch, RecordingSurface> {
    Poller::new(
        ScriptedFetch::with_responses(responses),
        RecordingSurface::default(),
    )
}

#[tokio::test]
async fn test_first_successful_fetch_renders_the_tree() {
    // Arrange
    let mut poller = poller_with(vec![Ok(sample_story_data(1))]);

    // Act
    let outcome = poller.tick().await;

    // Assert
    assert_eq!(outcome, TickOutcome::Rendered);
    let frame = poller.surface().last_frame().unwrap();
    assert!(frame.starts_with("<ul>"));
    assert!(frame.contains(r#"<div class="scene processing" data-id="1">"#));
    assert!(frame.contains("\u{27a1}\u{fe0f} Go left"));
    assert!(frame.contains("(Branch End)"));
    assert!(poller.snapshot().is_some());
}

#[tokio::test]
async fn test_identical_timestamps_produce_no_re_render() {
    let mut poller = poller_with(vec![Ok(sample_story_data(1)), Ok(sample_story_data(1))]);

    let first = poller.tick().await;
    let second = poller.tick().await;

    assert_eq!(first, TickOutcome::Rendered);
    assert_eq!(second, TickOutcome::Unchanged);
    assert_eq!(poller.surface().frames().len(), 1);
}

#[tokio::test]
async fn test_changed_timestamp_re_renders() {
    let mut poller = poller_with(vec![Ok(sample_story_data(1)), Ok(sample_story_data(2))]);

    poller.tick().await;
    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::Rendered);
    assert_eq!(poller.surface().frames().len(), 2);
}

#[tokio::test]
async fn test_absent_metadata_updates_unconditionally() {
    // Arrange — second payload has no metadata, so no comparison is
    // possible and the update is taken.
    let no_metadata = StoryData {
        metadata: None,
        ..sample_story_data(1)
    };
    let mut poller = poller_with(vec![Ok(sample_story_data(1)), Ok(no_metadata)]);

    // Act
    poller.tick().await;
    let outcome = poller.tick().await;

    // Assert
    assert_eq!(outcome, TickOutcome::Rendered);
    assert_eq!(poller.surface().frames().len(), 2);
}

#[tokio::test]
async fn test_backend_error_before_any_snapshot_shows_waiting_text() {
    let error_payload = StoryData {
        error: Some("story state not found".to_string()),
        ..StoryData::default()
    };
    let mut poller = poller_with(vec![Ok(error_payload)]);

    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::BackendError);
    let frame = poller.surface().last_frame().unwrap();
    assert!(frame.contains("story state not found"));
    assert!(frame.contains("Waiting"));
    assert!(poller.snapshot().is_none());
}

#[tokio::test]
async fn test_backend_error_after_a_render_leaves_display_untouched() {
    let error_payload = StoryData {
        error: Some("story state is being written".to_string()),
        ..StoryData::default()
    };
    let mut poller = poller_with(vec![Ok(sample_story_data(1)), Ok(error_payload)]);

    poller.tick().await;
    let snapshot_before = poller.snapshot().cloned();
    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::BackendError);
    assert_eq!(poller.surface().frames().len(), 1);
    assert_eq!(poller.snapshot().cloned(), snapshot_before);
}

#[tokio::test]
async fn test_http_error_shows_status_text_and_keeps_no_data() {
    let mut poller = poller_with(vec![Err(FetchError::Status {
        status: 404,
        reason: "Not Found".to_string(),
    })]);

    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::HttpError);
    assert_eq!(poller.surface().last_frame(), Some("Error: Not Found"));
    assert!(poller.snapshot().is_none());
}

#[tokio::test]
async fn test_http_error_after_a_render_replaces_display_but_not_snapshot() {
    let mut poller = poller_with(vec![
        Ok(sample_story_data(1)),
        Err(FetchError::Status {
            status: 502,
            reason: "Bad Gateway".to_string(),
        }),
    ]);

    poller.tick().await;
    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::HttpError);
    assert_eq!(poller.surface().last_frame(), Some("Error: Bad Gateway"));
    assert!(poller.snapshot().is_some());
}

#[tokio::test]
async fn test_transport_failure_shows_fixed_failure_text() {
    let mut poller = poller_with(vec![Err(FetchError::Transport(
        "connection refused".to_string(),
    ))]);

    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::FetchFailed);
    assert_eq!(poller.surface().last_frame(), Some(FETCH_FAILED_TEXT));
}

#[tokio::test]
async fn test_decode_failure_shows_fixed_failure_text() {
    let mut poller = poller_with(vec![Err(FetchError::Decode(
        "expected value at line 1".to_string(),
    ))]);

    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::FetchFailed);
    assert_eq!(poller.surface().last_frame(), Some(FETCH_FAILED_TEXT));
}

#[tokio::test]
async fn test_accepted_payload_without_tree_shows_waiting_text() {
    let no_tree = StoryData {
        story_tree: None,
        metadata: Some(StoryMetadata {
            timestamp: Some(json!(1)),
            ..StoryMetadata::default()
        }),
        error: None,
    };
    let mut poller = poller_with(vec![Ok(no_tree)]);

    let outcome = poller.tick().await;

    assert_eq!(outcome, TickOutcome::Waiting);
    assert_eq!(poller.surface().last_frame(), Some(WAITING_FOR_STORY_TEXT));
    // The payload was still accepted: same timestamp next tick is unchanged.
    assert!(poller.snapshot().is_some());
}

#[tokio::test]
async fn test_oversized_tree_shows_too_large_text_and_keeps_no_snapshot() {
    // Arrange — ten choices against a budget of three nodes, then a
    // payload that fits.
    let wide_tree = SceneNode {
        id: "1".to_string(),
        text: "Start".to_string(),
        child_choices: (0..10)
            .map(|i| Choice {
                id: format!("c{i}"),
                text: "Pick me".to_string(),
                child_scene: None,
            })
            .collect(),
    };
    let oversized = StoryData {
        story_tree: Some(wide_tree),
        metadata: Some(StoryMetadata {
            timestamp: Some(json!(1)),
            ..StoryMetadata::default()
        }),
        error: None,
    };
    let limits = RenderLimits {
        max_nodes: 3,
        ..RenderLimits::default()
    };
    let mut poller = Poller::with_limits(
        ScriptedFetch::with_responses(vec![Ok(oversized), Ok(sample_story_data(2))]),
        RecordingSurface::default(),
        limits,
    );

    // Act
    let first = poller.tick().await;
    let second = poller.tick().await;

    // Assert — the oversized payload was not snapshotted, so the later
    // payload renders normally.
    assert_eq!(first, TickOutcome::RenderFailed);
    assert_eq!(poller.surface().frames()[0], TREE_TOO_LARGE_TEXT);
    assert_eq!(second, TickOutcome::Rendered);
}
