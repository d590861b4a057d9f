//! Storyvine viewer entry point.
//!
//! Polls the story backend for `/story_data` and re-renders the branching
//! story tree into an HTML file whenever the payload changes.

use std::path::PathBuf;

use storyvine_poller::{HttpStoryClient, POLL_INTERVAL, Poller};
use storyvine_render::RenderLimits;
use tracing_subscriber::EnvFilter;

mod error;
mod surface;

use error::AppError;
use surface::HtmlFileSurface;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Storyvine viewer");

    // Read configuration from environment. The poll interval is fixed.
    let client = HttpStoryClient::from_env();
    let output = std::env::var("STORYVINE_OUTPUT").unwrap_or_else(|_| "story_view.html".to_string());
    let limits = parse_limits(
        std::env::var("STORYVINE_MAX_DEPTH").ok().as_deref(),
        std::env::var("STORYVINE_MAX_NODES").ok().as_deref(),
    )?;

    tracing::info!(%output, poll_interval = ?POLL_INTERVAL, "polling story data");

    let surface = HtmlFileSurface::new(PathBuf::from(output));
    let mut poller = Poller::with_limits(client, surface, limits);
    poller.run().await;

    Ok(())
}

/// Applies `STORYVINE_MAX_DEPTH` / `STORYVINE_MAX_NODES` overrides to the
/// default render limits.
fn parse_limits(max_depth: Option<&str>, max_nodes: Option<&str>) -> Result<RenderLimits, AppError> {
    let mut limits = RenderLimits::default();
    if let Some(raw) = max_depth {
        limits.max_depth = raw.parse().map_err(|e| {
            AppError::Config(format!("STORYVINE_MAX_DEPTH must be a positive integer: {e}"))
        })?;
    }
    if let Some(raw) = max_nodes {
        limits.max_nodes = raw.parse().map_err(|e| {
            AppError::Config(format!("STORYVINE_MAX_NODES must be a positive integer: {e}"))
        })?;
    }
    Ok(limits)
}
