//! Port for the rendering target.

/// A display surface whose content is replaced wholesale on each update.
///
/// The Rust rendition of injecting markup into the page container: no
/// incremental patching, the previous content is discarded entirely.
pub trait DisplaySurface: Send {
    /// Replaces the surface content with `markup`.
    fn replace(&mut self, markup: &str);
}
