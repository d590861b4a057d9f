//! Startup errors for the viewer binary.

use thiserror::Error;

/// Errors that prevent the viewer from starting.
///
/// Once the polling loop is running there are no fatal errors; everything is
/// surfaced as display text and retried on the next tick.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is present but invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
