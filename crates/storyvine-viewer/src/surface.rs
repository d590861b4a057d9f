//! File-backed display surface.

use std::fs;
use std::path::PathBuf;

use storyvine_core::surface::DisplaySurface;
use tracing::error;

/// Writes the full viewer page to a file on each replacement.
///
/// The file is the Rust rendition of the hosted page: a static shell with
/// the tree markup injected into the `story-tree` container. A failed write
/// is logged and the poll loop carries on.
pub struct HtmlFileSurface {
    path: PathBuf,
}

impl HtmlFileSurface {
    /// Creates a surface writing to `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DisplaySurface for HtmlFileSurface {
    fn replace(&mut self, markup: &str) {
        if let Err(err) = fs::write(&self.path, page(markup)) {
            error!(%err, path = %self.path.display(), "failed to write display file");
        }
    }
}

fn page(markup: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Storyvine</title>
<style>
body {{ font-family: sans-serif; margin: 1.5rem; }}
ul {{ list-style: none; padding-left: 1.25rem; }}
.scene {{ border-left: 2px solid #ccc; padding: 0.25rem 0.5rem; margin: 0.25rem 0; }}
.scene.processing, .choice.processing {{ background: #fff3cd; }}
.scene.added {{ border-left-color: #28a745; }}
.choice-text {{ color: #555; }}
.leaf-marker, .processing-marker {{ color: #999; font-size: 0.85em; }}
</style>
</head>
<body>
<h1>Storyvine</h1>
<div id="story-tree">{markup}</div>
</body>
</html>
"#
    )
}
