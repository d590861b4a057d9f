//! Recording implementation of the display surface port.

use storyvine_core::surface::DisplaySurface;

/// A [`DisplaySurface`] that records every replacement.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<String>,
}

impl RecordingSurface {
    /// Every content replacement, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The content currently on the surface.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn replace(&mut self, markup: &str) {
        self.frames.push(markup.to_string());
    }
}
